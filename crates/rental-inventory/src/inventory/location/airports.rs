//! Static IATA tables backing the location classifier.

/// Airports grouped by ISO 3166-1 alpha-2 country code.
pub(super) const AIRPORTS_BY_COUNTRY: &[(&str, &[&str])] = &[
    (
        "BR",
        &[
            "GRU", "CGH", "BSB", "GIG", "SDU", "CNF", "POA", "CWB", "SSA", "REC", "FOR", "BEL",
            "MAO", "VCP", "FLN", "NAT", "MCZ", "AJU", "CGB", "SLZ", "THE", "JPA", "PVH", "BVB",
            "RBR", "MCP", "PMW", "STM", "CZS", "TFF", "VIX", "UDI", "RAO", "SJP", "IGU", "JOI",
            "XAP", "MGF", "LDB", "NVT", "JDO", "CPV", "PNZ", "IOS", "IMP", "PPB", "UBA", "URG",
            "BPS", "ILZ", "CAW", "GYN", "CFB", "PLU", "BHZ", "MOC", "JDF", "VAG", "SJK", "RIA",
            "SOD", "BAU", "ARU",
        ],
    ),
    (
        "US",
        &[
            "JFK", "LAX", "ORD", "DFW", "DEN", "SFO", "SEA", "LAS", "MCO", "MIA", "CLT", "PHX",
            "IAH", "EWR", "MSP", "DTW", "BOS", "PHL", "LGA", "FLL", "BWI", "DCA", "SLC", "SAN",
            "IAD", "TPA", "HNL", "PDX", "STL", "BNA", "AUS", "OAK", "RDU", "SNA", "SJC", "SMF",
            "CLE", "MCI", "IND", "CMH", "SAT", "PIT", "CVG", "OGG", "RSW", "BDL", "MKE", "JAX",
            "ABQ", "OKC", "OMA", "MEM", "RIC", "ONT", "BUR", "PBI", "SDF", "TUS", "ANC", "BUF",
            "ATL", "ORF", "DAL", "HOU", "MDW", "MSY", "RNO", "BOI", "GEG", "LIT", "TUL", "GSP",
            "ROC", "SYR", "ALB", "PWM", "BTV", "DSM", "ICT", "FAT", "SBA", "PSP", "COS", "ELP",
            "LBB", "AMA", "MAF", "KOA", "LIH", "ITO", "FAI", "JNU", "SIT", "BRW", "OME", "OTZ",
        ],
    ),
    (
        "CA",
        &[
            "YYZ", "YVR", "YUL", "YYC", "YEG", "YOW", "YWG", "YHZ", "YQB", "YYJ", "YXE", "YQR",
            "YKA", "YLW", "YXJ", "YQT", "YQM", "YFC", "YSJ", "YDF", "YYT", "YZF", "YXY", "YFB",
        ],
    ),
    (
        "GB",
        &[
            "LHR", "LGW", "STN", "LTN", "MAN", "EDI", "GLA", "BHX", "BRS", "LPL", "NCL", "BFS",
            "LCY", "EMA", "SEN", "ABZ",
        ],
    ),
    (
        "DE",
        &[
            "FRA", "MUC", "BER", "DUS", "HAM", "CGN", "STR", "HAJ", "LEJ", "NUE", "TXL", "SXF",
            "DTM", "FMO", "PAD", "HHN",
        ],
    ),
    (
        "FR",
        &[
            "CDG", "ORY", "NCE", "LYS", "MRS", "TLS", "BOD", "NTE", "SXB", "MPL", "RNS", "LIL",
            "BIA", "AJA", "FSC",
        ],
    ),
    (
        "ES",
        &[
            "MAD", "BCN", "PMI", "AGP", "ALC", "IBZ", "TFS", "LPA", "VLC", "BIO", "SVQ", "ACE",
            "FUE", "GRX", "OVD", "SCQ",
        ],
    ),
    (
        "IT",
        &[
            "FCO", "MXP", "NAP", "VCE", "PSA", "BLQ", "TRN", "BGY", "CTA", "PMO", "FLR", "CAG",
            "OLB", "VRN", "GOA", "BRI",
        ],
    ),
    ("NL", &["AMS", "RTM", "EIN"]),
    ("BE", &["BRU", "CRL"]),
    ("CH", &["ZRH", "GVA", "BSL"]),
    ("AT", &["VIE", "SZG", "INN", "GRZ"]),
    ("DK", &["CPH"]),
    ("NO", &["OSL", "BGO", "TRD", "SVG"]),
    ("SE", &["ARN", "GOT", "MMX"]),
    ("FI", &["HEL", "TMP", "OUL"]),
    ("IS", &["KEF", "RKV"]),
    ("IE", &["DUB", "SNN", "ORK"]),
    ("PT", &["LIS", "OPO", "FAO", "FNC", "PDL"]),
    ("GR", &["ATH", "SKG", "HER", "RHO", "CFU", "CHQ", "JTR", "JMK"]),
    ("PL", &["WAW", "KRK", "GDN", "KTW", "WRO"]),
    ("CZ", &["PRG", "BRQ"]),
    ("HU", &["BUD"]),
    ("RO", &["OTP", "CLJ"]),
    ("BG", &["SOF", "VAR"]),
    ("HR", &["ZAG", "SPU", "DBV", "PUY"]),
    ("SI", &["LJU"]),
    ("SK", &["BTS", "KSC"]),
    ("LT", &["VNO", "KUN"]),
    ("LV", &["RIX"]),
    ("EE", &["TLL"]),
    ("RU", &["SVO", "DME", "VKO", "LED", "KZN", "SVX", "OVB", "VVO"]),
    ("UA", &["KBP", "IEV", "ODS", "LWO", "HRK", "DNK"]),
    ("AR", &["EZE", "AEP", "COR", "MDZ", "BRC", "IGR", "SLA", "TUC"]),
    ("CL", &["SCL", "IQQ", "ANF", "CCP", "PMC", "PUQ"]),
    ("CO", &["BOG", "MDE", "CTG", "CLO", "BAQ", "SMR", "ADZ"]),
    ("PE", &["LIM", "CUZ", "AQP", "TRU", "PIU"]),
    ("EC", &["UIO", "GYE", "CUE", "GPS"]),
    ("VE", &["CCS", "MAR", "VLN", "BLA"]),
    ("MX", &["MEX", "GDL", "CUN", "MTY", "TIJ", "SJD", "PVR", "CZM"]),
    ("PA", &["PTY"]),
    ("CR", &["SJO", "LIR"]),
    ("SV", &["SAL"]),
    ("GT", &["GUA"]),
    ("HN", &["TGU"]),
    ("NI", &["MGA"]),
    ("BZ", &["BZE"]),
    ("CU", &["HAV", "VRA", "HOG"]),
    ("PR", &["SJU"]),
    ("DO", &["SDQ", "PUJ", "STI"]),
    ("UY", &["MVD"]),
    ("PY", &["ASU"]),
    ("BO", &["VVI", "LPB", "CBB", "SRE"]),
    (
        "JP",
        &[
            "NRT", "HND", "KIX", "NGO", "CTS", "FUK", "OKA", "ITM", "KOJ", "HIJ", "SDJ", "KMQ",
            "TAK", "MYJ", "UBJ", "KCZ",
        ],
    ),
    ("KR", &["ICN", "GMP", "PUS", "CJU", "TAE", "KWJ", "RSU"]),
    (
        "CN",
        &[
            "PEK", "PVG", "CAN", "CTU", "SZX", "SHA", "HGH", "WUH", "XIY", "CKG", "KMG", "NKG",
            "TSN", "DLC", "TAO", "XMN", "CSX", "CGO", "SYX", "HAK", "NNG", "KHN", "HET",
        ],
    ),
    ("HK", &["HKG"]),
    ("MO", &["MFM"]),
    ("TW", &["TPE", "TSA", "KHH", "RMQ", "TNN"]),
    ("SG", &["SIN"]),
    ("TH", &["BKK", "DMK", "HKT", "CNX", "HDY", "USM", "KBV"]),
    ("MY", &["KUL", "SZB", "PEN", "LGK", "BKI", "KCH", "JHB"]),
    ("ID", &["CGK", "DPS", "SUB", "JOG", "UPG", "BPN", "PDG", "MES"]),
    ("PH", &["MNL", "CEB", "DVO", "ILO", "ZAM", "CRK", "KLO"]),
    ("VN", &["HAN", "SGN", "DAD", "CXR", "HPH", "VDO", "PQC"]),
    ("MM", &["RGN", "MDL", "NYU"]),
    ("KH", &["REP", "PNH"]),
    ("LA", &["VTE", "LPQ"]),
    ("BN", &["BWN"]),
    (
        "IN",
        &[
            "DEL", "BOM", "MAA", "BLR", "CCU", "HYD", "COK", "AMD", "PNQ", "GOI", "JAI", "LKO",
            "IXB", "TRV", "SXR", "GAU",
        ],
    ),
    ("PK", &["KHI", "LHE", "ISB"]),
    ("BD", &["DAC", "CGP"]),
    ("LK", &["CMB", "HRI"]),
    ("NP", &["KTM", "PKR"]),
    ("MV", &["MLE"]),
    ("AE", &["DXB", "AUH", "SHJ"]),
    ("QA", &["DOH"]),
    ("SA", &["RUH", "JED", "DMM", "MED"]),
    ("KW", &["KWI"]),
    ("BH", &["BAH"]),
    ("OM", &["MCT", "SLL"]),
    ("JO", &["AMM", "AQJ"]),
    ("LB", &["BEY"]),
    ("IL", &["TLV", "ETH", "SDV"]),
    ("EG", &["CAI", "HBE", "HRG", "SSH", "LXR"]),
    ("TR", &["IST", "SAW", "ESB", "AYT", "ADB", "DLM", "BJV"]),
    ("GE", &["TBS"]),
    ("AM", &["EVN"]),
    ("AZ", &["GYD"]),
    ("IR", &["IKA", "MHD", "THR", "SYZ"]),
    ("IQ", &["BGW", "BSR", "EBL", "NJF"]),
    (
        "AU",
        &[
            "SYD", "MEL", "BNE", "PER", "ADL", "OOL", "CNS", "CBR", "HBA", "DRW", "TSV", "ASP",
            "AVV", "MCY", "NTL", "LST",
        ],
    ),
    ("NZ", &["AKL", "WLG", "CHC", "ZQN", "DUD", "ROT", "NPE", "NPL"]),
    ("FJ", &["NAN", "SUV"]),
    ("PF", &["PPT", "BOB"]),
    ("NC", &["NOU"]),
    ("WS", &["APW"]),
    ("TO", &["TBU"]),
    ("PG", &["POM"]),
    ("GU", &["GUM"]),
    ("MP", &["SPN"]),
    ("AS", &["PPG"]),
    ("ZA", &["JNB", "CPT", "DUR", "PLZ", "GRJ", "HLA", "ELS", "BFN"]),
    ("MA", &["CMN", "RAK", "AGA", "FEZ", "TNG", "ESU", "OZZ", "NDR"]),
    ("TN", &["TUN", "NBE", "DJE", "SFA"]),
    ("DZ", &["ALG", "ORN", "CZL"]),
    ("NG", &["LOS", "ABV", "PHC", "KAN"]),
    ("GH", &["ACC"]),
    ("KE", &["NBO", "MBA", "KIS"]),
    ("TZ", &["DAR", "ZNZ", "JRO"]),
    ("UG", &["EBB"]),
    ("RW", &["KGL"]),
    ("ET", &["ADD", "DIR"]),
    ("MU", &["MRU"]),
    ("SC", &["SEZ"]),
    ("MG", &["TNR", "NOS"]),
    ("AO", &["LAD"]),
    ("ZM", &["LUN", "LVI"]),
    ("ZW", &["HRE", "VFA"]),
    ("BW", &["GBE", "MUB"]),
    ("NA", &["WDH"]),
    ("MZ", &["MPM"]),
    ("SN", &["DSS", "DKR"]),
    ("CI", &["ABJ"]),
    ("CM", &["DLA"]),
    ("GA", &["LBV"]),
    ("CD", &["FIH"]),
    ("CG", &["BZV"]),
];

/// Display metadata for the hubs travellers search most often: (code, name, city).
pub(super) const NAMED_AIRPORTS: &[(&str, &str, &str)] = &[
    ("JFK", "John F. Kennedy International Airport", "New York"),
    ("LAX", "Los Angeles International Airport", "Los Angeles"),
    ("ORD", "O'Hare International Airport", "Chicago"),
    ("DFW", "Dallas/Fort Worth International Airport", "Dallas"),
    ("ATL", "Hartsfield-Jackson Atlanta International Airport", "Atlanta"),
    ("MIA", "Miami International Airport", "Miami"),
    ("SFO", "San Francisco International Airport", "San Francisco"),
    ("SEA", "Seattle-Tacoma International Airport", "Seattle"),
    ("LAS", "Harry Reid International Airport", "Las Vegas"),
    ("MCO", "Orlando International Airport", "Orlando"),
    ("BOS", "Boston Logan International Airport", "Boston"),
    ("DEN", "Denver International Airport", "Denver"),
    ("PHX", "Phoenix Sky Harbor International Airport", "Phoenix"),
    ("IAH", "George Bush Intercontinental Airport", "Houston"),
    ("EWR", "Newark Liberty International Airport", "Newark"),
    ("BSB", "Brasília International Airport", "Brasília"),
    ("GRU", "São Paulo/Guarulhos International Airport", "São Paulo"),
    ("GIG", "Rio de Janeiro/Galeão International Airport", "Rio de Janeiro"),
    ("CGH", "São Paulo/Congonhas Airport", "São Paulo"),
    ("SDU", "Santos Dumont Airport", "Rio de Janeiro"),
    ("CNF", "Belo Horizonte/Confins International Airport", "Belo Horizonte"),
    ("POA", "Porto Alegre/Salgado Filho International Airport", "Porto Alegre"),
    ("REC", "Recife/Guararapes International Airport", "Recife"),
    ("SSA", "Salvador/Deputado Luís Eduardo Magalhães International Airport", "Salvador"),
    ("FOR", "Fortaleza/Pinto Martins International Airport", "Fortaleza"),
    ("CWB", "Curitiba/Afonso Pena International Airport", "Curitiba"),
    ("LHR", "London Heathrow Airport", "London"),
    ("CDG", "Paris Charles de Gaulle Airport", "Paris"),
    ("FRA", "Frankfurt Airport", "Frankfurt"),
    ("AMS", "Amsterdam Schiphol Airport", "Amsterdam"),
    ("MAD", "Adolfo Suárez Madrid-Barajas Airport", "Madrid"),
    ("BCN", "Barcelona El Prat Airport", "Barcelona"),
    ("FCO", "Rome Fiumicino Airport", "Rome"),
    ("MUC", "Munich Airport", "Munich"),
    ("ZRH", "Zurich Airport", "Zurich"),
    ("LGW", "London Gatwick Airport", "London"),
    ("YYZ", "Toronto Pearson International Airport", "Toronto"),
    ("YVR", "Vancouver International Airport", "Vancouver"),
    ("YUL", "Montréal-Trudeau International Airport", "Montreal"),
    ("YYC", "Calgary International Airport", "Calgary"),
    ("NRT", "Narita International Airport", "Tokyo"),
    ("HND", "Tokyo Haneda Airport", "Tokyo"),
    ("ICN", "Incheon International Airport", "Seoul"),
    ("SIN", "Singapore Changi Airport", "Singapore"),
    ("HKG", "Hong Kong International Airport", "Hong Kong"),
    ("BKK", "Suvarnabhumi Airport", "Bangkok"),
    ("DXB", "Dubai International Airport", "Dubai"),
    ("AUH", "Abu Dhabi International Airport", "Abu Dhabi"),
    ("DOH", "Hamad International Airport", "Doha"),
    ("SYD", "Sydney Kingsford Smith Airport", "Sydney"),
    ("MEL", "Melbourne Airport", "Melbourne"),
    ("AKL", "Auckland Airport", "Auckland"),
    ("EZE", "Buenos Aires Ezeiza International Airport", "Buenos Aires"),
    ("SCL", "Santiago Arturo Merino Benítez Airport", "Santiago"),
    ("BOG", "El Dorado International Airport", "Bogotá"),
    ("LIM", "Jorge Chávez International Airport", "Lima"),
    ("MEX", "Mexico City International Airport", "Mexico City"),
    ("CUN", "Cancún International Airport", "Cancún"),
    ("JNB", "O.R. Tambo International Airport", "Johannesburg"),
    ("CPT", "Cape Town International Airport", "Cape Town"),
    ("NBO", "Jomo Kenyatta International Airport", "Nairobi"),
];
