use crate::inventory::region::Region;

/// ISO 3166-1 alpha-2 codes grouped by market. A country appears in exactly one group.
pub(super) const COUNTRIES_BY_REGION: &[(Region, &[&str])] = &[
    (Region::Brazil, &["BR"]),
    (Region::Usa, &["US"]),
    (Region::Canada, &["CA"]),
    (
        Region::Europe,
        &[
            "GB", "UK", "DE", "FR", "IT", "ES", "PT", "NL", "BE", "AT", "CH", "SE", "NO", "DK",
            "FI", "IE", "GR", "PL", "CZ", "HU", "RO", "BG", "HR", "SI", "SK", "LT", "LV", "EE",
            "LU", "MT", "CY", "IS", "MC", "AD", "SM", "VA", "LI", "RS", "ME", "MK", "AL", "BA",
            "XK", "UA", "MD", "BY", "RU",
        ],
    ),
    (
        Region::Latam,
        &[
            "MX", "AR", "CL", "CO", "PE", "VE", "EC", "BO", "PY", "UY", "GY", "SR", "GF", "PA",
            "CR", "NI", "HN", "SV", "GT", "BZ", "CU", "DO", "HT", "JM", "PR", "TT", "BB", "BS",
            "AW", "CW", "SX", "TC", "KY", "VI", "VG", "AG", "LC", "VC", "GD", "DM", "KN", "MQ",
            "GP",
        ],
    ),
    (
        Region::Asia,
        &[
            "JP", "KR", "CN", "HK", "MO", "TW", "SG", "MY", "TH", "VN", "PH", "ID", "MM", "KH",
            "LA", "BN", "TL", "IN", "PK", "BD", "LK", "NP", "BT", "MV", "MN", "KZ", "UZ", "TM",
            "KG", "TJ", "AF",
        ],
    ),
    (
        Region::MiddleEast,
        &[
            "AE", "SA", "QA", "KW", "BH", "OM", "YE", "JO", "LB", "SY", "IQ", "IR", "IL", "PS",
            "TR", "GE", "AM", "AZ",
        ],
    ),
    (
        Region::Oceania,
        &[
            "AU", "NZ", "FJ", "PG", "NC", "PF", "WS", "TO", "VU", "SB", "GU", "FM", "PW", "MH",
            "KI", "NR", "TV", "MP", "AS",
        ],
    ),
    (
        Region::Africa,
        &[
            "ZA", "EG", "MA", "TN", "DZ", "LY", "NG", "GH", "KE", "TZ", "UG", "RW", "ET", "SD",
            "SS", "AO", "MZ", "ZW", "ZM", "BW", "NA", "MW", "MU", "SC", "MG", "RE", "SN", "CI",
            "CM", "GA", "CG", "CD", "ML", "BF", "NE", "TD", "ER", "DJ", "SO", "CV", "GM", "GN",
            "GW", "LR", "SL", "TG", "BJ", "MR", "CF", "GQ", "ST", "BI", "SZ", "LS", "KM",
        ],
    ),
];

pub(super) const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("BR", "Brazil"),
    ("US", "United States"),
    ("CA", "Canada"),
    ("GB", "United Kingdom"),
    ("DE", "Germany"),
    ("FR", "France"),
    ("ES", "Spain"),
    ("IT", "Italy"),
    ("NL", "Netherlands"),
    ("BE", "Belgium"),
    ("CH", "Switzerland"),
    ("AT", "Austria"),
    ("DK", "Denmark"),
    ("NO", "Norway"),
    ("SE", "Sweden"),
    ("FI", "Finland"),
    ("IS", "Iceland"),
    ("IE", "Ireland"),
    ("PT", "Portugal"),
    ("GR", "Greece"),
    ("PL", "Poland"),
    ("CZ", "Czech Republic"),
    ("HU", "Hungary"),
    ("RO", "Romania"),
    ("BG", "Bulgaria"),
    ("HR", "Croatia"),
    ("SI", "Slovenia"),
    ("SK", "Slovakia"),
    ("LT", "Lithuania"),
    ("LV", "Latvia"),
    ("EE", "Estonia"),
    ("RU", "Russia"),
    ("UA", "Ukraine"),
    ("AR", "Argentina"),
    ("CL", "Chile"),
    ("CO", "Colombia"),
    ("PE", "Peru"),
    ("EC", "Ecuador"),
    ("VE", "Venezuela"),
    ("MX", "Mexico"),
    ("PA", "Panama"),
    ("CR", "Costa Rica"),
    ("SV", "El Salvador"),
    ("GT", "Guatemala"),
    ("HN", "Honduras"),
    ("NI", "Nicaragua"),
    ("BZ", "Belize"),
    ("CU", "Cuba"),
    ("PR", "Puerto Rico"),
    ("DO", "Dominican Republic"),
    ("UY", "Uruguay"),
    ("PY", "Paraguay"),
    ("BO", "Bolivia"),
    ("JP", "Japan"),
    ("KR", "South Korea"),
    ("CN", "China"),
    ("HK", "Hong Kong"),
    ("MO", "Macau"),
    ("TW", "Taiwan"),
    ("SG", "Singapore"),
    ("TH", "Thailand"),
    ("MY", "Malaysia"),
    ("ID", "Indonesia"),
    ("PH", "Philippines"),
    ("VN", "Vietnam"),
    ("MM", "Myanmar"),
    ("KH", "Cambodia"),
    ("LA", "Laos"),
    ("BN", "Brunei"),
    ("IN", "India"),
    ("PK", "Pakistan"),
    ("BD", "Bangladesh"),
    ("LK", "Sri Lanka"),
    ("NP", "Nepal"),
    ("MV", "Maldives"),
    ("AE", "United Arab Emirates"),
    ("QA", "Qatar"),
    ("SA", "Saudi Arabia"),
    ("KW", "Kuwait"),
    ("BH", "Bahrain"),
    ("OM", "Oman"),
    ("JO", "Jordan"),
    ("LB", "Lebanon"),
    ("IL", "Israel"),
    ("EG", "Egypt"),
    ("TR", "Turkey"),
    ("GE", "Georgia"),
    ("AM", "Armenia"),
    ("AZ", "Azerbaijan"),
    ("IR", "Iran"),
    ("IQ", "Iraq"),
    ("AU", "Australia"),
    ("NZ", "New Zealand"),
    ("FJ", "Fiji"),
    ("PF", "French Polynesia"),
    ("NC", "New Caledonia"),
    ("WS", "Samoa"),
    ("TO", "Tonga"),
    ("PG", "Papua New Guinea"),
    ("GU", "Guam"),
    ("MP", "Northern Mariana Islands"),
    ("AS", "American Samoa"),
    ("ZA", "South Africa"),
    ("MA", "Morocco"),
    ("TN", "Tunisia"),
    ("DZ", "Algeria"),
    ("NG", "Nigeria"),
    ("GH", "Ghana"),
    ("KE", "Kenya"),
    ("TZ", "Tanzania"),
    ("UG", "Uganda"),
    ("RW", "Rwanda"),
    ("ET", "Ethiopia"),
    ("MU", "Mauritius"),
    ("SC", "Seychelles"),
    ("MG", "Madagascar"),
    ("AO", "Angola"),
    ("ZM", "Zambia"),
    ("ZW", "Zimbabwe"),
    ("BW", "Botswana"),
    ("NA", "Namibia"),
    ("MZ", "Mozambique"),
    ("SN", "Senegal"),
    ("CI", "Côte d'Ivoire"),
    ("CM", "Cameroon"),
    ("GA", "Gabon"),
    ("CD", "DR Congo"),
    ("CG", "Republic of the Congo"),
];
