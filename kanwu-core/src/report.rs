//! CSV encoding of the errata table
//!
//! The one output format referenced by callers: a header row followed by
//! one row per replacement with the wrong token, the correction, the
//! original clause, and the char lengths of both tokens. Fields containing
//! a comma, quote, or newline are wrapped in double quotes with internal
//! quotes doubled.

use crate::extract::WordReplacement;

const HEADER: &str = "wrong,correct,clause,wrong_len,correct_len";

/// Render replacements as CSV text
pub fn replacements_to_csv(replacements: &[WordReplacement]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for replacement in replacements {
        out.push_str(&csv_field(&replacement.wrong));
        out.push(',');
        out.push_str(&csv_field(&replacement.correct));
        out.push(',');
        out.push_str(&csv_field(&replacement.clause));
        out.push(',');
        out.push_str(&replacement.wrong.chars().count().to_string());
        out.push(',');
        out.push_str(&replacement.correct.chars().count().to_string());
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacement(wrong: &str, correct: &str, clause: &str) -> WordReplacement {
        WordReplacement {
            wrong: wrong.into(),
            correct: correct.into(),
            clause: clause.into(),
        }
    }

    #[test]
    fn header_only_for_empty_input() {
        assert_eq!(replacements_to_csv(&[]), format!("{HEADER}\n"));
    }

    #[test]
    fn plain_rows_are_unquoted() {
        let csv = replacements_to_csv(&[replacement("五伯", "五百", "他去了五伯家")]);
        assert_eq!(
            csv,
            format!("{HEADER}\n五伯,五百,他去了五伯家,2,2\n")
        );
    }

    #[test]
    fn lengths_count_chars_not_bytes() {
        let csv = replacements_to_csv(&[replacement("伯", "百", "五伯家")]);
        assert!(csv.ends_with("伯,百,五伯家,1,1\n"));
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let csv = replacements_to_csv(&[replacement("a,b", "c", "x,y")]);
        assert!(csv.contains("\"a,b\",c,\"x,y\""));
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let csv = replacements_to_csv(&[replacement("a\"b", "c", "d")]);
        assert!(csv.contains("\"a\"\"b\",c,d"));
    }

    #[test]
    fn embedded_newlines_are_quoted() {
        let csv = replacements_to_csv(&[replacement("a", "b", "x\ny")]);
        assert!(csv.contains("a,b,\"x\ny\""));
    }
}
