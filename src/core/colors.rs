use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_COLOR: &str = "#B0B0B0";

const PARTY_COLORS: &[(&str, &str)] = &[
    ("Labour", "#E4003B"),
    ("Conservative", "#0087DC"),
    ("Liberal Democrat", "#FAA61A"),
    ("Scottish National Party", "#FDF38E"),
    ("Sinn Féin", "#326760"),
    ("Independent", "#DDDDDD"),
    ("Democratic Unionist Party", "#D46A4C"),
    ("Reform UK", "#12B6CF"),
    ("Green", "#02A95B"),
    ("Plaid Cymru", "#005B54"),
    ("Social Democratic & Labour Party", "#2AA82C"),
    ("Alliance", "#F6CB2F"),
    ("Ulster Unionist Party", "#48A5EE"),
    ("Traditional Unionist Voice", "#0C3A6A"),
    ("Speaker", "#FFFFFF"),
];

const RESULT_COLORS: &[(&str, &str)] = &[
    ("Lab hold", "#E4003B"),
    ("Lab gain from Con", "#F26B8A"),
    ("Lab gain from SNP", "#F7A1B5"),
    ("Lab gain from PC", "#F9BFCD"),
    ("Con hold", "#0087DC"),
    ("LD hold", "#FAA61A"),
    ("LD gain from Con", "#FCC76E"),
    ("LD gain from SNP", "#FDD999"),
    ("SNP hold", "#FDF38E"),
    ("Reform gain from Con", "#12B6CF"),
    ("Reform gain from Lab", "#6BD3E2"),
    ("Green hold", "#02A95B"),
    ("Green gain from Con", "#4CC48C"),
    ("Green gain from Lab", "#8ADBB5"),
    ("PC hold", "#005B54"),
    ("PC gain from Con", "#4D8C87"),
    ("PC gain from Lab", "#80ADA9"),
    ("Ind gain from Lab", "#DDDDDD"),
    ("SF hold", "#326760"),
    ("DUP hold", "#D46A4C"),
    ("SDLP hold", "#2AA82C"),
    ("APNI gain from DUP", "#F6CB2F"),
    ("TUV gain from DUP", "#0C3A6A"),
    ("UUP gain from DUP", "#48A5EE"),
    ("Spk hold", "#FFFFFF"),
];

/// Party and result-category colour lookups with a fallback for unmapped
/// names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub party: HashMap<String, String>,
    pub result: HashMap<String, String>,
    pub default: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            party: to_map(PARTY_COLORS),
            result: to_map(RESULT_COLORS),
            default: DEFAULT_COLOR.to_string(),
        }
    }
}

fn to_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, color)| (name.to_string(), color.to_string()))
        .collect()
}

impl ColorScheme {
    pub fn party_color(&self, party: &str) -> &str {
        self.party.get(party).unwrap_or(&self.default)
    }

    pub fn result_color(&self, result: &str) -> &str {
        self.result.get(result).unwrap_or(&self.default)
    }

    /// Layers configured colours over the current tables; configured entries
    /// win on conflict.
    pub fn merge(
        mut self,
        party: &HashMap<String, String>,
        result: &HashMap<String, String>,
        default: Option<&str>,
    ) -> Self {
        self.party
            .extend(party.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.result
            .extend(result.iter().map(|(k, v)| (k.clone(), v.clone())));
        if let Some(default) = default {
            self.default = default.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unmapped_parties() {
        let colors = ColorScheme::default();
        assert_eq!(colors.party_color("Labour"), "#E4003B");
        assert_eq!(colors.party_color("Monster Raving Loony"), DEFAULT_COLOR);
        assert_eq!(colors.result_color("Con hold"), "#0087DC");
        assert_eq!(colors.result_color("Loony gain from Con"), DEFAULT_COLOR);
    }

    #[test]
    fn test_merge_overrides_and_extends() {
        let mut party = HashMap::new();
        party.insert("Labour".to_string(), "#FF0000".to_string());
        party.insert("Workers Party".to_string(), "#990000".to_string());

        let colors = ColorScheme::default().merge(&party, &HashMap::new(), Some("#000000"));

        assert_eq!(colors.party_color("Labour"), "#FF0000");
        assert_eq!(colors.party_color("Workers Party"), "#990000");
        assert_eq!(colors.party_color("Nobody"), "#000000");
        assert_eq!(colors.result_color("Lab hold"), "#E4003B");
    }
}
