use crate::models::KeyData;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyCard {
    pub kind: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// `1930` becomes `1,930`.
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

pub fn key_cards(key_data: &KeyData) -> Vec<KeyCard> {
    vec![
        KeyCard {
            kind: "calories",
            label: "Calories",
            value: format!("{}kCal", group_thousands(key_data.calorie_count)),
        },
        KeyCard {
            kind: "proteins",
            label: "Protéines",
            value: format!("{}g", group_thousands(key_data.protein_count)),
        },
        KeyCard {
            kind: "carbohydrates",
            label: "Glucides",
            value: format!("{}g", group_thousands(key_data.carbohydrate_count)),
        },
        KeyCard {
            kind: "lipids",
            label: "Lipides",
            value: format!("{}g", group_thousands(key_data.lipid_count)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(155), "155");
        assert_eq!(group_thousands(1930), "1,930");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn cards_carry_units() {
        let cards = key_cards(&KeyData {
            calorie_count: 1930,
            protein_count: 155,
            carbohydrate_count: 290,
            lipid_count: 50,
        });
        let values: Vec<_> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["1,930kCal", "155g", "290g", "50g"]);
    }
}
