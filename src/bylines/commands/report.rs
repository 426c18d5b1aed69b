use crate::commands::{CmdMessage, CmdResult, ReportArtifact};
use crate::error::Result;
use crate::report::{self, DateRange, ReportStyle};
use crate::roster::WriterStore;
use crate::store::Persistence;
use chrono::NaiveDate;

pub fn run<S: Persistence>(
    store: &WriterStore<S>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    style: &ReportStyle,
) -> Result<CmdResult> {
    // A half-specified range renders as if no range was given at all
    let period = match (start, end) {
        (Some(start), Some(end)) => Some(DateRange::new(start, end)),
        _ => None,
    };

    let entries = store.leaderboard();
    let summary = store.summary();
    let image = report::render(&entries, &summary, period.as_ref(), style)?;
    let filename = report::report_filename(period.as_ref());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Report rendered ({}x{})",
        image.width, image.height
    )));
    Ok(result.with_report(ReportArtifact { filename, image }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn full_range_lands_in_the_filename() {
        let (store, _) = WriterStore::open(InMemoryStore::new()).unwrap();
        let result = run(
            &store,
            Some(date(2026, 1, 1)),
            Some(date(2026, 1, 31)),
            &ReportStyle::default(),
        )
        .unwrap();
        let artifact = result.report.unwrap();
        assert_eq!(artifact.filename, "writer_report_20260101_to_20260131.png");
    }

    #[test]
    fn half_specified_range_is_treated_as_none() {
        let (store, _) = WriterStore::open(InMemoryStore::new()).unwrap();
        let result = run(
            &store,
            Some(date(2026, 1, 1)),
            None,
            &ReportStyle::default(),
        )
        .unwrap();
        assert_eq!(result.report.unwrap().filename, "writer_report.png");
    }

    #[test]
    fn report_reflects_the_roster_size() {
        let (mut store, _) = WriterStore::open(InMemoryStore::new()).unwrap();
        for i in 0..10 {
            add::run(&mut store, &format!("Writer {}", i)).unwrap();
        }

        let style = ReportStyle::default();
        let result = run(&store, None, None, &style).unwrap();
        let image = result.report.unwrap().image;
        assert_eq!(
            image.height,
            crate::report::layout::canvas_height(&style, 10)
        );
    }
}
