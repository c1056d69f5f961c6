//! CSV export of the records joined with both balance series.

use anyhow::{Context, Result};

use crate::domain::OutcomeRecord;
use crate::simulator::BalanceSeries;
use crate::store::bool_field;

/// Columns: index, prediction, actual, correct, flat_balance, martingale_balance.
pub fn export_series_csv(records: &[OutcomeRecord]) -> Result<String> {
    let series = BalanceSeries::compute(records);
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "index",
        "prediction",
        "actual",
        "correct",
        "flat_balance",
        "martingale_balance",
    ])?;

    for (i, r) in records.iter().enumerate() {
        let index = (i + 1).to_string();
        let actual = format!("{:?}", r.actual());
        let flat = format!("{:.6}", series.flat[i]);
        let martingale = format!("{:.6}", series.martingale[i]);
        wtr.write_record([
            index.as_str(),
            r.prediction().as_str(),
            actual.as_str(),
            bool_field(r.correct()),
            flat.as_str(),
            martingale.as_str(),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Prediction;

    #[test]
    fn header_only_when_empty() {
        let csv = export_series_csv(&[]).unwrap();
        assert_eq!(
            csv.trim_end(),
            "index,prediction,actual,correct,flat_balance,martingale_balance"
        );
    }

    #[test]
    fn rows_carry_both_balances() {
        let records = [
            OutcomeRecord::evaluate(Prediction::Above, 1.0),
            OutcomeRecord::evaluate(Prediction::Above, 1.0),
            OutcomeRecord::evaluate(Prediction::Above, 3.0),
        ];
        let csv = export_series_csv(&records).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "1,Above,1.0,False,0.090000,0.090000");
        assert_eq!(lines[2], "2,Above,1.0,False,0.080000,0.070000");
        assert_eq!(lines[3], "3,Above,3.0,True,0.090000,0.110000");
    }

    #[test]
    fn correct_column_matches_record_file_encoding() {
        let records = [
            OutcomeRecord::evaluate(Prediction::Under, 1.5),
            OutcomeRecord::evaluate(Prediction::Under, 2.5),
        ];
        let csv = export_series_csv(&records).unwrap();
        let flags: Vec<&str> = csv
            .lines()
            .skip(1)
            .map(|l| l.split(',').nth(3).unwrap())
            .collect();
        assert_eq!(flags, ["True", "False"]);
    }
}
