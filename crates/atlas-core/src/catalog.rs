//! Country catalog
//!
//! Static, immutable mapping of country name to population. Built once at
//! startup and shared by reference with every session.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub population: u64,
}

/// Immutable country → population table with stable ordering
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<CountryRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// The built-in world catalog
    pub fn builtin() -> Self {
        match Self::from_entries(BUILTIN.iter().map(|(name, pop)| (name.to_string(), *pop))) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(error = %e, "Built-in country table is invalid");
                Self::empty()
            }
        }
    }

    /// Build a catalog from arbitrary entries, preserving their order.
    ///
    /// A repeated name is rejected.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut catalog = Self::empty();
        for (name, population) in entries {
            let name = name.into();
            if catalog.index.contains_key(&name) {
                return Err(Error::ContractViolation(format!(
                    "duplicate catalog entry: {}",
                    name
                )));
            }
            catalog.index.insert(name.clone(), catalog.records.len());
            catalog.records.push(CountryRecord { name, population });
        }
        Ok(catalog)
    }

    fn empty() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Population for a country, or `NotFound`
    pub fn lookup(&self, name: &str) -> Result<u64> {
        self.get(name)
            .map(|r| r.population)
            .ok_or_else(|| Error::NotFound(format!("unknown country: {}", name)))
    }

    pub fn get(&self, name: &str) -> Option<&CountryRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All entries in table order
    pub fn all(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Case-insensitive substring search over country names, in table order
    pub fn search(&self, term: &str) -> Vec<&CountryRecord> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&term))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Static population table, in display order.
const BUILTIN: &[(&str, u64)] = &[
    ("China", 1_425_671_352),
    ("India", 1_417_173_173),
    ("United States", 339_996_563),
    ("Indonesia", 277_534_122),
    ("Pakistan", 240_485_658),
    ("Nigeria", 223_804_632),
    ("Brazil", 216_422_446),
    ("Bangladesh", 171_186_372),
    ("Russia", 144_444_359),
    ("Mexico", 128_455_567),
    ("Ethiopia", 126_527_060),
    ("Japan", 123_294_513),
    ("Philippines", 117_337_368),
    ("Egypt", 112_716_598),
    ("Vietnam", 98_858_950),
    ("Iran", 86_758_304),
    ("Turkey", 85_816_199),
    ("Germany", 83_294_633),
    ("Thailand", 71_668_264),
    ("United Kingdom", 67_736_802),
    ("Tanzania", 67_438_106),
    ("France", 64_756_584),
    ("South Africa", 60_414_495),
    ("Italy", 58_940_687),
    ("Myanmar", 55_227_143),
    ("Kenya", 55_100_586),
    ("South Korea", 51_784_059),
    ("Colombia", 51_874_024),
    ("Uganda", 48_582_334),
    ("Spain", 47_519_628),
    ("Argentina", 45_773_884),
    ("Algeria", 45_606_480),
    ("Sudan", 45_992_020),
    ("Ukraine", 43_306_477),
    ("Iraq", 44_496_122),
    ("Afghanistan", 42_239_854),
    ("Poland", 41_026_067),
    ("Canada", 39_742_430),
    ("Morocco", 37_840_044),
    ("Saudi Arabia", 36_947_025),
    ("Uzbekistan", 35_163_944),
    ("Peru", 33_715_471),
    ("Angola", 35_588_987),
    ("Malaysia", 33_938_221),
    ("Mozambique", 33_897_354),
    ("Ghana", 33_475_870),
    ("Yemen", 33_697_358),
    ("Nepal", 30_896_590),
    ("Venezuela", 28_838_499),
    ("Madagascar", 30_325_732),
    ("Cameroon", 28_647_293),
    ("North Korea", 26_069_416),
    ("Australia", 26_439_111),
    ("Niger", 26_207_977),
    ("Sri Lanka", 23_103_565),
    ("Burkina Faso", 23_251_485),
    ("Mali", 22_593_590),
    ("Romania", 19_892_812),
    ("Malawi", 20_405_317),
    ("Chile", 19_629_590),
    ("Kazakhstan", 19_644_865),
    ("Zambia", 20_017_675),
    ("Guatemala", 18_092_026),
    ("Ecuador", 18_001_000),
    ("Syria", 19_364_809),
    ("Netherlands", 17_590_672),
    ("Senegal", 18_275_743),
    ("Cambodia", 16_944_826),
    ("Chad", 18_278_568),
    ("Somalia", 18_143_378),
    ("Zimbabwe", 16_665_409),
    ("Guinea", 14_190_612),
    ("Rwanda", 14_256_567),
    ("Benin", 13_712_828),
    ("Burundi", 13_238_559),
    ("Tunisia", 12_458_223),
    ("Bolivia", 12_224_110),
    ("Belgium", 11_686_140),
    ("Haiti", 11_724_763),
    ("Cuba", 11_212_191),
    ("South Sudan", 11_088_796),
    ("Dominican Republic", 11_332_972),
    ("Czech Republic", 10_827_529),
    ("Greece", 10_432_481),
    ("Jordan", 11_285_869),
    ("Portugal", 10_467_366),
    ("Azerbaijan", 10_358_074),
    ("Sweden", 10_612_086),
    ("Honduras", 10_593_798),
    ("United Arab Emirates", 10_081_785),
    ("Hungary", 9_676_135),
    ("Tajikistan", 10_143_543),
    ("Belarus", 9_498_238),
    ("Austria", 9_120_813),
    ("Papua New Guinea", 10_329_931),
    ("Serbia", 8_653_016),
    ("Israel", 9_756_700),
    ("Switzerland", 8_921_981),
    ("Togo", 8_680_837),
    ("Sierra Leone", 8_791_092),
    ("Hong Kong", 7_346_248),
    ("Laos", 7_633_779),
    ("Paraguay", 6_861_524),
    ("Bulgaria", 6_687_717),
    ("Libya", 6_888_388),
    ("Lebanon", 5_489_739),
    ("Nicaragua", 6_948_392),
    ("Kyrgyzstan", 6_735_347),
    ("El Salvador", 6_364_943),
    ("Turkmenistan", 6_117_924),
    ("Singapore", 5_941_060),
    ("Denmark", 5_910_913),
    ("Finland", 5_545_475),
    ("Congo", 5_835_806),
    ("Slovakia", 5_428_792),
    ("Norway", 5_474_360),
    ("Oman", 4_644_384),
    ("Palestine", 5_371_230),
    ("Costa Rica", 5_212_173),
    ("Liberia", 5_418_377),
    ("Ireland", 5_056_935),
    ("Central African Republic", 5_579_144),
    ("New Zealand", 5_228_100),
    ("Mauritania", 4_862_989),
    ("Panama", 4_351_267),
    ("Kuwait", 4_310_108),
    ("Croatia", 3_853_200),
    ("Moldova", 3_435_931),
    ("Georgia", 3_736_400),
    ("Eritrea", 3_748_901),
    ("Uruguay", 3_423_108),
    ("Bosnia and Herzegovina", 3_210_847),
    ("Mongolia", 3_398_366),
    ("Armenia", 2_777_970),
    ("Jamaica", 2_825_544),
    ("Qatar", 2_716_391),
    ("Albania", 2_832_439),
    ("Puerto Rico", 2_829_812),
    ("Lithuania", 2_718_352),
    ("Namibia", 2_604_172),
    ("Gambia", 2_759_198),
    ("Botswana", 2_675_352),
    ("Gabon", 2_436_566),
    ("Lesotho", 2_330_318),
    ("Slovenia", 2_119_675),
    ("North Macedonia", 2_093_599),
    ("Latvia", 1_830_211),
    ("Bahrain", 1_783_983),
    ("Equatorial Guinea", 1_714_671),
    ("Trinidad and Tobago", 1_534_937),
    ("Estonia", 1_322_765),
    ("Timor-Leste", 1_360_596),
    ("Mauritius", 1_300_557),
    ("Cyprus", 1_260_138),
    ("Eswatini", 1_202_005),
    ("Djibouti", 1_136_455),
    ("Fiji", 924_610),
    ("Réunion", 981_796),
    ("Comoros", 852_075),
    ("Guyana", 813_834),
    ("Bhutan", 787_424),
    ("Solomon Islands", 740_424),
    ("Macao", 695_168),
    ("Montenegro", 626_485),
    ("Luxembourg", 640_064),
    ("Western Sahara", 611_875),
    ("Suriname", 618_040),
    ("Cape Verde", 598_682),
    ("Maldives", 521_021),
    ("Malta", 519_562),
    ("Brunei", 452_524),
    ("Belize", 405_272),
    ("Bahamas", 412_623),
    ("Iceland", 375_318),
    ("Vanuatu", 334_506),
    ("Barbados", 281_995),
    ("New Caledonia", 290_915),
    ("French Polynesia", 308_872),
    ("Samoa", 205_557),
    ("Saint Lucia", 180_251),
    ("Kiribati", 133_515),
    ("Micronesia", 114_164),
    ("Grenada", 124_610),
    ("Saint Vincent and the Grenadines", 103_948),
    ("Aruba", 106_277),
    ("Tonga", 107_749),
    ("United States Virgin Islands", 99_465),
    ("Seychelles", 107_118),
    ("Antigua and Barbuda", 93_219),
    ("Isle of Man", 84_710),
    ("Andorra", 79_824),
    ("Dominica", 72_737),
    ("Cayman Islands", 69_310),
    ("Bermuda", 64_055),
    ("Marshall Islands", 41_996),
    ("Northern Mariana Islands", 49_796),
    ("Greenland", 56_583),
    ("American Samoa", 44_273),
    ("Saint Kitts and Nevis", 47_755),
    ("Faroe Islands", 53_270),
    ("Sint Maarten", 44_222),
    ("Monaco", 36_469),
    ("Turks and Caicos Islands", 46_062),
    ("Saint Martin", 32_556),
    ("Liechtenstein", 39_327),
    ("San Marino", 33_745),
    ("British Virgin Islands", 31_758),
    ("Cook Islands", 17_571),
    ("Palau", 18_055),
    ("Anguilla", 15_857),
    ("Wallis and Futuna", 11_572),
    ("Tuvalu", 11_396),
    ("Nauru", 12_780),
    ("Saint Barthélemy", 9_907),
    ("Saint Helena", 5_314),
    ("Saint Pierre and Miquelon", 5_840),
    ("Montserrat", 4_922),
    ("Falkland Islands", 3_539),
    ("Norfolk Island", 2_188),
    ("Christmas Island", 1_692),
    ("Tokelau", 1_893),
    ("Niue", 1_549),
    ("Vatican City", 825),
    ("Cocos Islands", 573),
    ("Pitcairn Islands", 50),
];
