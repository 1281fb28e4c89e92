use uuid::Uuid;

/// Random identifier in the `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` layout.
pub fn guid() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guid_layout() {
        let id = guid();
        let groups: Vec<usize> = id.split('-').map(str::len).collect();

        assert_eq!(groups, vec![8, 4, 4, 4, 12]);
        assert!(id
            .chars()
            .all(|c| c == '-' || c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_guids_differ() {
        assert_ne!(guid(), guid());
    }
}
