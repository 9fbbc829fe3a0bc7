mod render;

use analyzer::{height_histogram, MovieAnalyzer, MovieSample, ALL, DEFAULT_HEIGHT_BINS};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{DataPaths, DEFAULT_DATA_DIR};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// Movie Explorer - aggregate views over the CMU movie-summary corpus
#[derive(Parser)]
#[command(name = "movie-explorer")]
#[command(about = "Explore genres, releases and cast statistics of a movie corpus", long_about = None)]
struct Cli {
    /// Directory holding movie.metadata.tsv and character.metadata.tsv
    #[arg(short, long, global = true, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Most frequent movie genres
    Genres {
        /// Number of genres to show
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Movies released per year
    Releases {
        /// Only count movies of this genre ("All" for every movie)
        #[arg(long)]
        genre: Option<String>,

        /// List the genres that can be passed to --genre
        #[arg(long)]
        list_genres: bool,
    },

    /// Distribution of the number of actors per movie
    ActorCount {
        /// Draw a bar chart
        #[arg(long)]
        plot: bool,
    },

    /// Actor births per year (Y) or per month (M)
    Ages {
        #[arg(long, default_value = "Y")]
        mode: String,
    },

    /// Actors filtered by gender and height
    Heights {
        /// Male, Female or All
        #[arg(long, default_value = ALL)]
        gender: String,

        /// Minimum height in meters
        #[arg(long, default_value = "1.5")]
        min: f64,

        /// Maximum height in meters
        #[arg(long, default_value = "2.0")]
        max: f64,

        /// Histogram buckets used with --plot (at most 1000)
        #[arg(long, default_value_t = DEFAULT_HEIGHT_BINS)]
        bins: usize,

        /// Draw a height histogram instead of listing actors
        #[arg(long)]
        plot: bool,
    },

    /// Show a random movie with its title, summary and known genres
    Sample,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load the corpus once; every command below only reads it
    let start = Instant::now();
    let analyzer = MovieAnalyzer::load(&DataPaths::in_dir(&cli.data_dir))
        .with_context(|| format!("Failed to load movie corpus from {}", cli.data_dir.display()))?;
    if !cli.json {
        let (movies, appearances, merged) = analyzer.dataset().counts();
        println!(
            "{} Loaded {} movies, {} appearances ({} joined) in {:?}",
            "✓".green(),
            movies,
            appearances,
            merged,
            start.elapsed()
        );
    }

    match cli.command {
        Commands::Genres { top } => handle_genres(&analyzer, top, cli.json)?,
        Commands::Releases { genre, list_genres } => {
            handle_releases(&analyzer, genre.as_deref(), list_genres, cli.json)?
        }
        Commands::ActorCount { plot } => handle_actor_count(&analyzer, plot, cli.json)?,
        Commands::Ages { mode } => handle_ages(&analyzer, &mode, cli.json)?,
        Commands::Heights {
            gender,
            min,
            max,
            bins,
            plot,
        } => handle_heights(&analyzer, &gender, min, max, bins, plot, cli.json)?,
        Commands::Sample => handle_sample(&analyzer, cli.json)?,
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// JSON body of the 'sample' command; `null` when there is no movie to pick
fn sample_json(sample: Option<&MovieSample>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&sample)?)
}

/// Handle the 'genres' command
fn handle_genres(analyzer: &MovieAnalyzer, top: usize, json: bool) -> Result<()> {
    let genres = analyzer.movie_type(top)?;
    if json {
        return print_json(&genres);
    }

    println!("{}", format!("Top {} movie genres:", top).bold().blue());
    let rows: Vec<(String, usize)> = genres
        .iter()
        .map(|g| (g.genre.clone(), g.count))
        .collect();
    render::table(("Genre", "Count"), &rows);
    Ok(())
}

/// Handle the 'releases' command
fn handle_releases(
    analyzer: &MovieAnalyzer,
    genre: Option<&str>,
    list_genres: bool,
    json: bool,
) -> Result<()> {
    if list_genres {
        let mut genres = vec![ALL.to_string()];
        genres.extend(analyzer.available_genres());
        if json {
            return print_json(&genres);
        }
        for genre in genres {
            println!("{}{}", "• ".green(), genre);
        }
        return Ok(());
    }

    let releases = analyzer.releases(genre);
    if json {
        return print_json(&releases);
    }

    println!(
        "{}",
        format!("Movies released per year ({}):", genre.unwrap_or(ALL))
            .bold()
            .blue()
    );
    if releases.is_empty() {
        render::warn_empty("No movies found for the selected genre.");
        return Ok(());
    }
    let rows: Vec<(String, usize)> = releases
        .iter()
        .map(|y| (y.year.to_string(), y.count))
        .collect();
    render::bar_chart(&rows);
    Ok(())
}

/// Handle the 'actor-count' command
fn handle_actor_count(analyzer: &MovieAnalyzer, plot: bool, json: bool) -> Result<()> {
    let buckets = analyzer.actor_count();
    if json {
        return print_json(&buckets);
    }

    println!("{}", "Distribution of number of actors per movie:".bold().blue());
    if buckets.is_empty() {
        render::warn_empty("No actor data available.");
        return Ok(());
    }
    let rows: Vec<(String, usize)> = buckets
        .iter()
        .map(|b| (b.actors.to_string(), b.movies))
        .collect();
    if plot {
        render::bar_chart(&rows);
    } else {
        render::table(("Number of Actors", "Movie Count"), &rows);
    }
    Ok(())
}

/// Handle the 'ages' command
fn handle_ages(analyzer: &MovieAnalyzer, mode: &str, json: bool) -> Result<()> {
    let births = analyzer.ages(mode);
    if json {
        return print_json(&births);
    }

    let label = if mode == "M" { "month" } else { "year" };
    println!("{}", format!("Actor births per {}:", label).bold().blue());
    if births.is_empty() {
        render::warn_empty("No actor age data available (mode must be Y or M).");
        return Ok(());
    }
    let rows: Vec<(String, usize)> = births
        .iter()
        .map(|b| (b.period.to_string(), b.count))
        .collect();
    render::bar_chart(&rows);
    Ok(())
}

/// Handle the 'heights' command
fn handle_heights(
    analyzer: &MovieAnalyzer,
    gender: &str,
    min: f64,
    max: f64,
    bins: usize,
    plot: bool,
    json: bool,
) -> Result<()> {
    let actors = analyzer.actor_distributions(gender, min, max)?;

    if plot {
        let histogram = height_histogram(&actors, bins)?;
        if json {
            return print_json(&histogram);
        }
        println!("{}", format!("Actor height distribution ({}):", gender).bold().blue());
        if histogram.is_empty() {
            render::warn_empty("No data available for the selected criteria.");
            return Ok(());
        }
        let rows: Vec<(String, usize)> = histogram
            .iter()
            .map(|b| (format!("{:.2}-{:.2}m", b.lower, b.upper), b.count))
            .collect();
        render::bar_chart(&rows);
        return Ok(());
    }

    if json {
        return print_json(&actors);
    }
    println!(
        "{}",
        format!("Actors ({}, {}m - {}m):", gender, min, max).bold().blue()
    );
    if actors.is_empty() {
        render::warn_empty("No data available for the selected criteria.");
        return Ok(());
    }
    for actor in &actors {
        println!(
            "{}{} ({}) {:.2}m in {}",
            "• ".green(),
            actor.actor_name.as_deref().unwrap_or("<unnamed>"),
            actor.actor_gender.as_deref().unwrap_or("?"),
            actor.actor_height,
            actor.title
        );
    }
    Ok(())
}

/// Handle the 'sample' command
fn handle_sample(analyzer: &MovieAnalyzer, json: bool) -> Result<()> {
    let sample = analyzer.sample_movie(&mut rand::rng());
    if json {
        println!("{}", sample_json(sample.as_ref())?);
        return Ok(());
    }
    let Some(sample) = sample else {
        render::warn_empty("The movie table is empty.");
        return Ok(());
    };

    let genres = if sample.genres.is_empty() {
        "No genres available".to_string()
    } else {
        sample.genres.join(", ")
    };
    println!("{}", sample.title.bold().blue());
    println!("{}", sample.summary);
    println!("{}Genres: {}", "• ".cyan(), genres);
    Ok(())
}
