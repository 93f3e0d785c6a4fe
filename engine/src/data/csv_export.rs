// Breakdown and comparison tables as CSV. Amounts are plain numbers with two
// decimals so spreadsheets can sum them.
use crate::error::EngineError;
use csv::Writer;
use shared::models::{CalculationResult, TripComparison};
use std::io::Write;

fn amount(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn write_breakdown<W: Write>(writer: W, result: &CalculationResult) -> Result<(), EngineError> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(["category", "amount", "share_pct"])?;
    for (category, value) in result.categories() {
        csv.write_record([
            category.label().to_string(),
            amount(value),
            format!("{:.1}", result.share_of_total(category)),
        ])?;
    }
    csv.write_record(["Total".to_string(), amount(result.total_cost), "100.0".to_string()])?;
    csv.write_record(["Per person".to_string(), amount(result.cost_per_person), String::new()])?;
    csv.flush()?;
    Ok(())
}

pub fn write_comparison<W: Write>(
    writer: W,
    label1: &str,
    label2: &str,
    comparison: &TripComparison,
) -> Result<(), EngineError> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(["category", label1, label2, "difference"])?;
    for row in comparison.category_rows() {
        csv.write_record([
            row.category.label().to_string(),
            amount(row.value1),
            amount(row.value2),
            amount(row.diff),
        ])?;
    }
    csv.write_record([
        "Total".to_string(),
        amount(comparison.trip1_result.total_cost),
        amount(comparison.trip2_result.total_cost),
        amount(comparison.difference),
    ])?;
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::estimator::{calculate_trip, tests::{goa_trip, road_trip}};
    use crate::services::compare_trips;

    #[test]
    fn test_breakdown_rows() {
        let mut out = Vec::new();
        write_breakdown(&mut out, &calculate_trip(&goa_trip())).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "category,amount,share_pct");
        assert_eq!(lines[1], "Transport,2900.00,24.8");
        assert_eq!(lines[3], "Food & Drinks,3000.00,25.6");
        assert_eq!(lines[7], "Operational,0.00,0.0");
        assert_eq!(lines[8], "Total,11700.00,100.0");
        assert_eq!(lines[9], "Per person,5850.00,");
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_comparison_rows() {
        let comparison = compare_trips(&goa_trip(), &road_trip());
        let mut out = Vec::new();
        write_comparison(&mut out, "Goa", "Lonavala", &comparison).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "category,Goa,Lonavala,difference");
        assert_eq!(lines[1], "Transport,2900.00,1583.33,1316.67");
        // Operational is zero on both sides and left out
        assert!(!text.contains("Operational"));
        assert_eq!(lines.last().copied(), Some("Total,11700.00,1583.33,10116.67"));
    }
}
