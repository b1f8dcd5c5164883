use crate::contacts::model::Record;

/// Запрос трактуется как подстрока без учета регистра, не как шаблон
pub fn matches(record: &Record, query: &str) -> bool {
    let q = query.to_lowercase();
    record.name.to_lowercase().contains(&q)
        || record.phone.to_lowercase().contains(&q)
        || record.contact_type.to_lowercase().contains(&q)
}

pub fn filter_contacts(contacts: Vec<Record>, query: &str) -> Vec<Record> {
    contacts.into_iter().filter(|c| matches(c, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Vec<Record> {
        vec![
            Record {
                name: "Jane Doe".to_string(),
                phone: "555-1234".to_string(),
                contact_type: "mobile".to_string(),
            },
            Record {
                name: "Bob Fax".to_string(),
                phone: "555-9999".to_string(),
                contact_type: "fax".to_string(),
            },
        ]
    }

    #[test]
    fn matches_substring_of_phone() {
        let kept = filter_contacts(directory(), "555-1");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Jane Doe");
    }

    #[test]
    fn matches_substring_of_type() {
        let kept = filter_contacts(directory(), "fax");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Bob Fax");
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(filter_contacts(directory(), "JANE").len(), 1);
        assert_eq!(filter_contacts(directory(), "MoBiLe").len(), 1);
    }

    #[test]
    fn query_is_a_literal_not_a_pattern() {
        assert!(filter_contacts(directory(), ".*").is_empty());
        assert!(filter_contacts(directory(), "555-1[0-9]").is_empty());
    }

    #[test]
    fn keeps_source_order() {
        let kept = filter_contacts(directory(), "555");
        assert_eq!(kept[0].name, "Jane Doe");
        assert_eq!(kept[1].name, "Bob Fax");
    }

    #[test]
    fn no_match_yields_empty_set() {
        assert!(filter_contacts(directory(), "carrier pigeon").is_empty());
    }
}
