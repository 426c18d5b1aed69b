use crate::commands::CmdResult;
use crate::error::Result;
use crate::roster::WriterStore;
use crate::store::Persistence;

pub fn run<S: Persistence>(store: &WriterStore<S>) -> Result<CmdResult> {
    let entries = store.leaderboard();
    let summary = store.summary();
    Ok(CmdResult::default()
        .with_entries(entries)
        .with_summary(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, set_stats};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn ranks_by_articles_breaking_ties_on_views() {
        let (mut store, _) = WriterStore::open(InMemoryStore::new()).unwrap();
        add::run(&mut store, "FiveHundred").unwrap();
        add::run(&mut store, "FiveFifty").unwrap();
        add::run(&mut store, "ThreeThousand").unwrap();
        set_stats::run(&mut store, "1", 5, 100).unwrap();
        set_stats::run(&mut store, "2", 5, 50).unwrap();
        set_stats::run(&mut store, "3", 3, 1000).unwrap();

        let result = run(&store).unwrap();
        let names: Vec<&str> = result.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["FiveHundred", "FiveFifty", "ThreeThousand"]);
    }

    #[test]
    fn summary_aggregates_the_whole_roster() {
        let (mut store, _) = WriterStore::open(InMemoryStore::new()).unwrap();
        add::run(&mut store, "Ada").unwrap();
        add::run(&mut store, "Grace").unwrap();
        set_stats::run(&mut store, "1", 3, 10).unwrap();
        set_stats::run(&mut store, "2", 0, 999).unwrap();

        let summary = run(&store).unwrap().summary.unwrap();
        assert_eq!(summary.total_writers, 2);
        assert_eq!(summary.total_articles, 3);
        assert_eq!(summary.total_views, 1009);
        assert_eq!(summary.avg_views_per_article, 336); // 1009/3 = 336.33
    }

    #[test]
    fn listing_does_not_mutate_the_store() {
        let (mut store, _) = WriterStore::open(InMemoryStore::new()).unwrap();
        add::run(&mut store, "Ada").unwrap();
        let before = store.document().clone();

        run(&store).unwrap();
        run(&store).unwrap();
        assert_eq!(store.document(), &before);
    }
}
