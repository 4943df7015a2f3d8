//! Static choice data for Russian administrative divisions.
//!
//! Counties are the seven federal districts. Regions are the federal
//! subjects keyed by their official two-digit codes, ordered by code the
//! same way region listings elsewhere order by code.

use crate::shared::types::Choice;

/// Federal districts offered by the county select widget.
pub static RU_COUNTY_CHOICES: &[Choice] = &[
    Choice::new("central", "Central"),
    Choice::new("far-eastern", "Far Eastern"),
    Choice::new("northwestern", "Northwestern"),
    Choice::new("privolzhsky", "Privolzhsky"),
    Choice::new("siberian", "Siberian"),
    Choice::new("south", "South"),
    Choice::new("urals", "Urals"),
];

/// Federal subjects offered by the region select widget.
pub static RU_REGIONS_CHOICES: &[Choice] = &[
    Choice::new("01", "Republic of Adygeya"),
    Choice::new("02", "Republic of Bashkortostan"),
    Choice::new("03", "Republic of Buryatiya"),
    Choice::new("04", "Altai Republic"),
    Choice::new("05", "Republic of Dagestan"),
    Choice::new("06", "Republic of Ingushetiya"),
    Choice::new("07", "Kabardino-Balkarian Republic"),
    Choice::new("08", "Republic of Kalmykiya"),
    Choice::new("09", "Karachayevo-Cherkessian Republic"),
    Choice::new("10", "Republic of Kareliya"),
    Choice::new("11", "Komi Republic"),
    Choice::new("12", "Republic of Mariy El"),
    Choice::new("13", "Republic of Mordoviya"),
    Choice::new("14", "Republic of Sakha (Yakutiya)"),
    Choice::new("15", "Republic of North Ossetiya-Alaniya"),
    Choice::new("16", "Republic of Tatarstan"),
    Choice::new("17", "Republic of Tyva"),
    Choice::new("18", "Udmurtian Republic"),
    Choice::new("19", "Republic of Khakasiya"),
    Choice::new("20", "Chechen Republic"),
    Choice::new("21", "Chuvashian Republic"),
    Choice::new("22", "Altai Krai"),
    Choice::new("23", "Krasnodar Krai"),
    Choice::new("24", "Krasnoyarsk Krai"),
    Choice::new("25", "Primorskiy Krai"),
    Choice::new("26", "Stavropol Krai"),
    Choice::new("27", "Khabarovsk Krai"),
    Choice::new("28", "Amur Oblast"),
    Choice::new("29", "Arkhangelsk Oblast"),
    Choice::new("30", "Astrakhan Oblast"),
    Choice::new("31", "Belgorod Oblast"),
    Choice::new("32", "Bryansk Oblast"),
    Choice::new("33", "Vladimir Oblast"),
    Choice::new("34", "Volgograd Oblast"),
    Choice::new("35", "Vologda Oblast"),
    Choice::new("36", "Voronezh Oblast"),
    Choice::new("37", "Ivanovo Oblast"),
    Choice::new("38", "Irkutsk Oblast"),
    Choice::new("39", "Kaliningrad Oblast"),
    Choice::new("40", "Kaluga Oblast"),
    Choice::new("41", "Kamchatka Krai"),
    Choice::new("42", "Kemerovo Oblast"),
    Choice::new("43", "Kirov Oblast"),
    Choice::new("44", "Kostroma Oblast"),
    Choice::new("45", "Kurgan Oblast"),
    Choice::new("46", "Kursk Oblast"),
    Choice::new("47", "Leningrad Oblast"),
    Choice::new("48", "Lipetsk Oblast"),
    Choice::new("49", "Magadan Oblast"),
    Choice::new("50", "Moscow Oblast"),
    Choice::new("51", "Murmansk Oblast"),
    Choice::new("52", "Nizhny Novgorod Oblast"),
    Choice::new("53", "Novgorod Oblast"),
    Choice::new("54", "Novosibirsk Oblast"),
    Choice::new("55", "Omsk Oblast"),
    Choice::new("56", "Orenburg Oblast"),
    Choice::new("57", "Oryol Oblast"),
    Choice::new("58", "Penza Oblast"),
    Choice::new("59", "Perm Krai"),
    Choice::new("60", "Pskov Oblast"),
    Choice::new("61", "Rostov Oblast"),
    Choice::new("62", "Ryazan Oblast"),
    Choice::new("63", "Samara Oblast"),
    Choice::new("64", "Saratov Oblast"),
    Choice::new("65", "Sakhalin Oblast"),
    Choice::new("66", "Sverdlovsk Oblast"),
    Choice::new("67", "Smolensk Oblast"),
    Choice::new("68", "Tambov Oblast"),
    Choice::new("69", "Tver Oblast"),
    Choice::new("70", "Tomsk Oblast"),
    Choice::new("71", "Tula Oblast"),
    Choice::new("72", "Tyumen Oblast"),
    Choice::new("73", "Ulyanovsk Oblast"),
    Choice::new("74", "Chelyabinsk Oblast"),
    Choice::new("75", "Zabaykalsky Krai"),
    Choice::new("76", "Yaroslavl Oblast"),
    Choice::new("77", "Moscow"),
    Choice::new("78", "Saint Petersburg"),
    Choice::new("79", "Jewish Autonomous Oblast"),
    Choice::new("83", "Nenets Autonomous Okrug"),
    Choice::new("86", "Khanty-Mansi Autonomous Okrug"),
    Choice::new("87", "Chukotka Autonomous Okrug"),
    Choice::new("89", "Yamalo-Nenets Autonomous Okrug"),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_county_choices_complete() {
        assert_eq!(RU_COUNTY_CHOICES.len(), 7);
    }

    #[test]
    fn test_region_choices_complete() {
        assert_eq!(RU_REGIONS_CHOICES.len(), 83);
    }

    #[test]
    fn test_region_codes_unique_and_ordered() {
        let codes: Vec<&str> = RU_REGIONS_CHOICES.iter().map(|c| c.code).collect();
        let unique: HashSet<&str> = codes.iter().copied().collect();
        assert_eq!(unique.len(), codes.len());

        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_region_codes_are_two_digits() {
        for choice in RU_REGIONS_CHOICES {
            assert_eq!(choice.code.len(), 2, "bad code: {}", choice.code);
            assert!(choice.code.chars().all(|ch| ch.is_ascii_digit()));
        }
    }
}
