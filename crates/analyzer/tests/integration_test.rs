//! Integration tests for the analyzer.
//!
//! These tests write a small corpus to a temporary directory in the real
//! file layout and drive it through load and every aggregator.

use analyzer::{ALL, AnalyzerError, GenreCount, MovieAnalyzer, height_histogram};
use data_loader::{DataLoadError, DataPaths};
use std::fs;
use tempfile::TempDir;

const MOVIES: &str = "\
975900\t/m/03vyhn\tGhosts of Mars\t2001-08-24\t14010832\t98.0\t{\"/m/02h40lc\": \"English Language\"}\t{\"/m/09c7w0\": \"United States of America\"}\t{\"/m/01jfsb\": \"Thriller\", \"/m/06n90\": \"Science Fiction\", \"/m/03npn\": \"Horror\", \"/m/02kdv5l\": \"Action\"}
3196793\t/m/08yl5d\tGetting Away with Murder: The JonBenét Ramsey Mystery\t2000-02-16\t\t95.0\t{\"/m/02h40lc\": \"English Language\"}\t{\"/m/09c7w0\": \"United States of America\"}\t{\"/m/02n4kr\": \"Mystery\", \"/m/03bxz7\": \"Biographical film\", \"/m/07s9rl0\": \"Drama\", \"/m/0hj3n01\": \"Crime Drama\"}
28463795\t/m/0crgdbh\tBrun bitter\t1988\t\t83.0\t{\"/m/05f_3\": \"Norwegian Language\"}\t{\"/m/05b4w\": \"Norway\"}\t{\"/m/0lsxr\": \"Crime Fiction\", \"/m/07s9rl0\": \"Drama\"}
9363483\t/m/0285_cd\tWhite Of The Eye\t\t\t110.0\t{\"/m/02h40lc\": \"English Language\"}\t{\"/m/07ssc\": \"United Kingdom\"}\t{\"/m/01jfsb\": \"Thriller\", \"/m/0glj9q\": \"Erotic thriller\", \"/m/09blyk\": \"Psychological thriller\"}
261236\t/m/01mrr1\tA Woman in Flames\tsometime\t\t106.0\t{}\t{}\tnot a mapping
";

const CHARACTERS: &str = "\
975900\t/m/03vyhn\t2001-08-24\tAkooshay\t1958-08-26\tF\t1.62\t\tWanda De Jesus\t42\t/m/0bgchxw\t/m/0bgcj3x\t/m/03wcfv7
975900\t/m/03vyhn\t2001-08-24\tLieutenant Melanie Ballard\t1974-08-15\tF\t1.78\t/m/044038p\tNatasha Henstridge\t27\t/m/0jys3m\t/m/0bgchn4\t/m/0346l4
975900\t/m/03vyhn\t2001-08-24\tDesolation Williams\t1969-06-15\tM\t1.727\t/m/0x67\tIce Cube\t32\t/m/0jys3g\t/m/0bgchn_\t/m/01vw26l
975900\t/m/03vyhn\t2001-08-24\tSgt Jericho Butler\t1967-09-12\tM\t1.75\t\tJason Statham\t33\t/m/02vchl6\t/m/0bgchnq\t/m/034hyc
975900\t/m/03vyhn\t2001-08-24\tBashira Kincaid\t1977-09-25\tF\t1.65\t\tClea DuVall\t23\t/m/02vbb3r\t/m/0bgchp9\t/m/01y9xg
3196793\t/m/08yl5d\t2000-02-16\tJohn Ramsey\t1947\tM\t\t\tCliff DeYoung\t52\t/m/0lr37dy\t/m/0lr37d_\t/m/01t_xp
3196793\t/m/08yl5d\t2000-02-16\tPatsy Ramsey\t1958-06\tF\tunknown\t\tLaura Leighton\t41\t/m/0lr37dy\t/m/0lr37dz\t/m/05k6j7
28463795\t/m/0crgdbh\t1988\t\t\tM\t1.9\t\t\t\t\t\t
12345\t/m/none\t1999\tNobody\t1980-01-01\tM\t1.80\t\tOrphaned Actor\t19\t\t\t
";

fn write_corpus(with_summaries: bool) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("movie.metadata.tsv"), MOVIES).unwrap();
    fs::write(dir.path().join("character.metadata.tsv"), CHARACTERS).unwrap();
    if with_summaries {
        fs::write(
            dir.path().join("plot_summaries.txt"),
            "975900\tSet in the second half of the 22nd century, the film depicts Mars.\n",
        )
        .unwrap();
    }
    dir
}

fn load(dir: &TempDir) -> MovieAnalyzer {
    MovieAnalyzer::load(&DataPaths::in_dir(dir.path())).unwrap()
}

#[test]
fn test_load_counts() {
    let dir = write_corpus(true);
    let analyzer = load(&dir);

    // The orphaned actor's movie does not exist
    assert_eq!(analyzer.dataset().counts(), (5, 9, 8));

    let movies = analyzer.dataset().movies().movies();
    assert!(movies[0].summary.starts_with("Set in the second half"));
    assert_eq!(movies[0].languages, vec!["English Language".to_string()]);
    assert!(movies[4].genres.is_empty());
}

#[test]
fn test_missing_file_propagates() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("character.metadata.tsv"), CHARACTERS).unwrap();

    match MovieAnalyzer::load(&DataPaths::in_dir(dir.path())) {
        Err(AnalyzerError::Load(DataLoadError::DataUnavailable { path })) => {
            assert!(path.ends_with("movie.metadata.tsv"))
        }
        other => panic!("expected DataUnavailable, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_movie_type() {
    let dir = write_corpus(false);
    let analyzer = load(&dir);

    let top = analyzer.movie_type(2).unwrap();
    assert_eq!(
        top,
        vec![
            GenreCount {
                genre: "Drama".to_string(),
                count: 2
            },
            GenreCount {
                genre: "Thriller".to_string(),
                count: 2
            },
        ]
    );

    let all = analyzer.movie_type(100).unwrap();
    assert!(all.len() <= 100);
    assert!(all.windows(2).all(|w| w[0].count >= w[1].count));
    assert!(all.iter().all(|g| g.count > 0));
}

#[test]
fn test_releases() {
    let dir = write_corpus(false);
    let analyzer = load(&dir);

    let years: Vec<(i32, usize)> = analyzer
        .releases(None)
        .iter()
        .map(|y| (y.year, y.count))
        .collect();
    assert_eq!(years, vec![(1988, 1), (2000, 1), (2001, 1)]);

    let drama: Vec<i32> = analyzer
        .releases(Some("Drama"))
        .iter()
        .map(|y| y.year)
        .collect();
    assert_eq!(drama, vec![1988, 2000]);

    assert_eq!(analyzer.releases(Some(ALL)), analyzer.releases(None));
    assert!(analyzer.releases(Some("Space Western")).is_empty());
}

#[test]
fn test_actor_count() {
    let dir = write_corpus(false);
    let analyzer = load(&dir);

    let buckets: Vec<(usize, usize)> = analyzer
        .actor_count()
        .iter()
        .map(|b| (b.actors, b.movies))
        .collect();
    // Ghosts of Mars: 5, JonBenét: 2, Brun bitter: its one row has no actor name
    assert_eq!(buckets, vec![(2, 1), (5, 1)]);
}

#[test]
fn test_ages() {
    let dir = write_corpus(false);
    let analyzer = load(&dir);

    let by_year = analyzer.ages("Y");
    assert_eq!(by_year.iter().map(|b| b.count).sum::<usize>(), 8);
    assert!(by_year.windows(2).all(|w| w[0].period < w[1].period));

    let by_month = analyzer.ages("M");
    // 1947 is only known to the year
    assert_eq!(by_month.iter().map(|b| b.count).sum::<usize>(), 7);
    assert!(by_month.iter().all(|b| (1..=12).contains(&b.period)));

    assert!(analyzer.ages("Z").is_empty());
}

#[test]
fn test_actor_distributions() {
    let dir = write_corpus(false);
    let analyzer = load(&dir);

    for gender in ["Male", "Female"] {
        let rows = analyzer.actor_distributions(gender, 1.5, 2.0).unwrap();
        assert!(!rows.is_empty());
        for row in &rows {
            assert!((1.5..=2.0).contains(&row.actor_height));
            assert_eq!(row.actor_gender.as_deref(), Some(gender));
        }
    }

    let everyone = analyzer.actor_distributions(ALL, 0.5, 2.5).unwrap();
    // Heights missing or unparsable for the two Ramseys
    assert_eq!(everyone.len(), 6);

    let histogram = height_histogram(&everyone, 5).unwrap();
    assert_eq!(histogram.iter().map(|b| b.count).sum::<usize>(), 6);

    assert!(matches!(
        analyzer.actor_distributions("NotAGender", 1.5, 2.0),
        Err(AnalyzerError::InvalidArgument { argument: "gender", .. })
    ));
}

#[test]
fn test_queries_are_deterministic() {
    let dir = write_corpus(false);
    let first = load(&dir);
    let second = load(&dir);

    assert_eq!(first.movie_type(10).unwrap(), second.movie_type(10).unwrap());
    assert_eq!(first.movie_type(10).unwrap(), first.movie_type(10).unwrap());
    assert_eq!(first.actor_count(), second.actor_count());
    assert_eq!(first.ages("Y"), first.ages("Y"));
}
