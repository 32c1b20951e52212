/// Class index to character table: 0-25 map to A-Z, 26-35 map to 0-9.
const LABEL_TABLE: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

pub fn label_for(index: i64) -> Option<char> {
    usize::try_from(index)
        .ok()
        .and_then(|i| LABEL_TABLE.get(i).copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn letters_come_first_then_digits() {
        assert_eq!(label_for(0), Some('A'));
        assert_eq!(label_for(25), Some('Z'));
        assert_eq!(label_for(26), Some('0'));
        assert_eq!(label_for(35), Some('9'));
    }

    #[test]
    fn out_of_range_indices_have_no_label() {
        assert_eq!(label_for(-1), None);
        assert_eq!(label_for(36), None);
        assert_eq!(label_for(i64::MAX), None);
    }

    #[test]
    fn table_holds_36_unique_symbols() {
        let unique: HashSet<char> = LABEL_TABLE.iter().copied().collect();
        assert_eq!(unique.len(), 36);
    }
}
