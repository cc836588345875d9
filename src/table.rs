//! Multiplication table rendering.

const RULE: &str = "==================================";

/// Render the table for `base`, one row per multiplier in `0..=limit`.
///
/// A negative `limit` yields the header alone.
pub fn generate(base: i64, limit: i64) -> String {
    let mut out = header(base);
    for i in 0..=limit {
        // i128 holds any i64 * i64 product
        let product = i128::from(base) * i128::from(i);
        out.push_str(&format!("{base} x {i} = {product}\n"));
    }
    out
}

fn header(base: i64) -> String {
    format!("{RULE}\n        Table of {base}\n{RULE}\n\n")
}

/// Number of rows `generate` emits for `limit`.
pub fn row_count(limit: i64) -> u64 {
    if limit < 0 {
        0
    } else {
        limit as u64 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(table: &str) -> Vec<&str> {
        table.lines().filter(|l| l.contains(" x ")).collect()
    }

    #[test]
    fn test_row_per_multiplier_inclusive() {
        let table = generate(5, 10);
        let rows = rows(&table);
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0], "5 x 0 = 0");
        assert_eq!(rows[10], "5 x 10 = 50");
    }

    #[test]
    fn test_products_match_arithmetic() {
        for base in [-7, -1, 0, 3, 12] {
            let table = generate(base, 6);
            for (i, row) in rows(&table).iter().enumerate() {
                let value: i128 = row.rsplit(" = ").next().unwrap().parse().unwrap();
                assert_eq!(value, i128::from(base) * i as i128, "row {row}");
            }
        }
    }

    #[test]
    fn test_header_names_base() {
        let table = generate(7, 3);
        assert!(table.starts_with(RULE));
        assert!(table.contains("Table of 7"));
    }

    #[test]
    fn test_negative_limit_is_header_only() {
        let table = generate(4, -3);
        assert!(rows(&table).is_empty());
        assert_eq!(table, header(4));
        assert_eq!(row_count(-3), 0);
    }

    #[test]
    fn test_zero_limit_single_row() {
        let table = generate(9, 0);
        assert_eq!(rows(&table), vec!["9 x 0 = 0"]);
        assert_eq!(row_count(0), 1);
    }

    #[test]
    fn test_rows_newline_terminated() {
        assert!(generate(3, 2).ends_with("3 x 2 = 6\n"));
    }

    #[test]
    fn test_large_operands_do_not_overflow() {
        let table = generate(i64::MAX, 2);
        let expected = format!("{} x 2 = {}", i64::MAX, i128::from(i64::MAX) * 2);
        assert!(rows(&table).contains(&expected.as_str()));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(generate(6, 12), generate(6, 12));
    }
}
