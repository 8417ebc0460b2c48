/// Scan release-note text for `AB#<digits>` work item references.
///
/// Returns every referenced id in first-seen order, duplicates included.
/// Occurrences immediately preceded by `[` are skipped: those are link
/// bodies produced by an earlier run, so re-scanning rewritten notes
/// yields nothing new. The lookbehind is exactly one character.
pub fn extract_work_item_ids(body: &str) -> Vec<u64> {
    let bytes = body.as_bytes();
    let mut ids = Vec::new();
    let mut from = 0;

    while let Some(pos) = body[from..].find("AB#") {
        let at = from + pos;
        let digits_start = at + 3;
        let mut digits_end = digits_start;
        while digits_end < bytes.len() && bytes[digits_end].is_ascii_digit() {
            digits_end += 1;
        }

        if digits_end > digits_start && (at == 0 || bytes[at - 1] != b'[') {
            if let Ok(id) = body[digits_start..digits_end].parse::<u64>() {
                ids.push(id);
            }
        }

        from = digits_end;
    }

    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_references_yields_empty() {
        assert!(extract_work_item_ids("").is_empty());
        assert!(extract_work_item_ids("Nothing to see here.").is_empty());
        assert!(extract_work_item_ids("ab#123 is lowercase, AB# has no digits").is_empty());
    }

    #[test]
    fn finds_plain_reference() {
        assert_eq!(extract_work_item_ids("Fixed in AB#123."), vec![123]);
    }

    #[test]
    fn reference_at_start_of_text() {
        assert_eq!(extract_work_item_ids("AB#7 was the culprit"), vec![7]);
    }

    #[test]
    fn skips_reference_inside_link() {
        assert!(extract_work_item_ids("[AB#123 [Task] Title (Done)](url)").is_empty());
    }

    #[test]
    fn lookbehind_is_one_character_only() {
        // Only the byte directly before the token matters.
        assert_eq!(extract_work_item_ids("[ AB#9"), vec![9]);
        assert_eq!(extract_work_item_ids("see [link] AB#9"), vec![9]);
    }

    #[test]
    fn duplicates_kept_in_order() {
        assert_eq!(
            extract_work_item_ids("AB#5 then AB#3 then AB#5 again"),
            vec![5, 3, 5]
        );
    }

    #[test]
    fn multiple_references_first_seen_order() {
        let body = "AB#11 AB#1 AB#111 AB#5 AB#14 AB#143 AB#112";
        assert_eq!(
            extract_work_item_ids(body),
            vec![11, 1, 111, 5, 14, 143, 112]
        );
    }

    #[test]
    fn greedy_digit_run_is_one_reference() {
        assert_eq!(extract_work_item_ids("AB#123456"), vec![123456]);
    }

    #[test]
    fn mixed_linked_and_unlinked() {
        let body = "done: [AB#1 [Task] t (Done)](u), pending: AB#2";
        assert_eq!(extract_work_item_ids(body), vec![2]);
    }
}
