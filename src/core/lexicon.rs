//! # Lexicon
//!
//! Key biblical terms with Hebrew/Greek definitions, data sourced from
//! Strong's Concordance (public domain). Lookup is an exact, case-insensitive
//! match after stripping a fixed punctuation set; a linear scan is plenty at
//! this table size.

/// One lexicon entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Definition {
    pub word: &'static str,
    pub original: &'static str,
    pub transliteration: &'static str,
    pub strongs_number: &'static str,
    pub definition: &'static str,
    pub etymology: Option<&'static str>,
}

pub static DEFINITIONS: &[Definition] = &[
    // God/Deity terms
    Definition {
        word: "God",
        original: "אֱלֹהִים / Θεός",
        transliteration: "Elohim / Theos",
        strongs_number: "H430 / G2316",
        definition: "Supreme Being, the Creator. Hebrew 'Elohim' is plural, showing majesty. Greek 'Theos' refers to divine nature.",
        etymology: Some("From 'el' (mighty, strong)"),
    },
    Definition {
        word: "Lord",
        original: "יְהוָה / Κύριος",
        transliteration: "YHWH / Kyrios",
        strongs_number: "H3068 / G2962",
        definition: "The personal name of God (Yahweh/Jehovah). Kyrios means master, supreme authority.",
        etymology: Some("From 'hayah' (to be, to exist)"),
    },
    // Love terms
    Definition {
        word: "love",
        original: "אַהֲבָה / ἀγάπη",
        transliteration: "ahavah / agapē",
        strongs_number: "H160 / G26",
        definition: "Divine, unconditional love. Agapē is the highest form of love - selfless, sacrificial, chosen.",
        etymology: Some("Hebrew root 'ahav' (to love). Greek agapē (divine love)"),
    },
    Definition {
        word: "loved",
        original: "אָהַב / ἠγάπησεν",
        transliteration: "ahav / ēgapēsen",
        strongs_number: "H157 / G25",
        definition: "To love deeply, to have affection. Past tense of divine love.",
        etymology: Some("From ahavah (love)"),
    },
    // Faith terms
    Definition {
        word: "faith",
        original: "אֱמוּנָה / πίστις",
        transliteration: "emunah / pistis",
        strongs_number: "H530 / G4102",
        definition: "Trust, belief, faithfulness. Firm conviction and complete trust in God.",
        etymology: Some("From 'aman' (to be firm, steadfast)"),
    },
    Definition {
        word: "believe",
        original: "אָמַן / πιστεύω",
        transliteration: "aman / pisteuō",
        strongs_number: "H539 / G4100",
        definition: "To trust, have confidence in. To place faith and reliance upon.",
        etymology: Some("Root meaning 'to be firm, reliable'"),
    },
    // Grace/Mercy
    Definition {
        word: "grace",
        original: "חֵן / χάρις",
        transliteration: "chen / charis",
        strongs_number: "H2580 / G5485",
        definition: "Unmerited favor, divine blessing. God's kindness and goodwill toward humanity.",
        etymology: Some("From 'chanan' (to be gracious)"),
    },
    Definition {
        word: "mercy",
        original: "חֶסֶד / ἔλεος",
        transliteration: "chesed / eleos",
        strongs_number: "H2617 / G1656",
        definition: "Loving-kindness, covenant love. Compassion and steadfast love.",
        etymology: Some("Loyal love, faithfulness"),
    },
    // Hope/Peace
    Definition {
        word: "hope",
        original: "תִּקְוָה / ἐλπίς",
        transliteration: "tiqvah / elpis",
        strongs_number: "H8615 / G1680",
        definition: "Confident expectation, trust in God's promises. Assurance of future good.",
        etymology: Some("From 'qavah' (to wait, expect)"),
    },
    Definition {
        word: "peace",
        original: "שָׁלוֹם / εἰρήνη",
        transliteration: "shalom / eirēnē",
        strongs_number: "H7965 / G1515",
        definition: "Completeness, wholeness, harmony. Not just absence of conflict but total well-being.",
        etymology: Some("From 'shalam' (to be complete)"),
    },
    // Life/Spirit
    Definition {
        word: "life",
        original: "חַיִּים / ζωή",
        transliteration: "chayyim / zōē",
        strongs_number: "H2416 / G2222",
        definition: "Living, alive. Greek zōē refers to divine life, eternal life.",
        etymology: Some("From 'chayah' (to live, revive)"),
    },
    Definition {
        word: "spirit",
        original: "רוּחַ / πνεῦμα",
        transliteration: "ruach / pneuma",
        strongs_number: "H7307 / G4151",
        definition: "Breath, wind, spirit. The immaterial, intelligent part of humans; the Spirit of God.",
        etymology: Some("Literally 'breath' or 'wind'"),
    },
    // Salvation terms
    Definition {
        word: "salvation",
        original: "יְשׁוּעָה / σωτηρία",
        transliteration: "yeshuah / sōtēria",
        strongs_number: "H3444 / G4991",
        definition: "Deliverance, rescue, safety. God's saving work and eternal redemption.",
        etymology: Some("From 'yasha' (to save, deliver)"),
    },
    Definition {
        word: "save",
        original: "יָשַׁע / σῴζω",
        transliteration: "yasha / sōzō",
        strongs_number: "H3467 / G4982",
        definition: "To deliver, rescue, bring to safety. To preserve from destruction.",
        etymology: Some("To be open, wide, free"),
    },
    // Truth/Righteousness
    Definition {
        word: "truth",
        original: "אֱמֶת / ἀλήθεια",
        transliteration: "emet / alētheia",
        strongs_number: "H571 / G225",
        definition: "Reliability, faithfulness, reality. That which corresponds to fact and reality.",
        etymology: Some("From 'aman' (to be firm, sure)"),
    },
    Definition {
        word: "righteousness",
        original: "צְדָקָה / δικαιοσύνη",
        transliteration: "tsedaqah / dikaiosynē",
        strongs_number: "H6666 / G1343",
        definition: "Justice, rightness, moral virtue. Right standing before God.",
        etymology: Some("From 'tsadaq' (to be just, righteous)"),
    },
    // Kingdom/Glory
    Definition {
        word: "kingdom",
        original: "מַלְכוּת / βασιλεία",
        transliteration: "malkuth / basileia",
        strongs_number: "H4438 / G932",
        definition: "Royal power, realm, reign. The sovereign rule and domain of God.",
        etymology: Some("From 'melek' (king)"),
    },
    Definition {
        word: "glory",
        original: "כָּבוֹד / δόξα",
        transliteration: "kavod / doxa",
        strongs_number: "H3519 / G1391",
        definition: "Honor, splendor, brightness. The visible manifestation of God's presence.",
        etymology: Some("From 'kaved' (to be heavy, weighty)"),
    },
    // Covenant/Promise
    Definition {
        word: "covenant",
        original: "בְּרִית / διαθήκη",
        transliteration: "berith / diathēkē",
        strongs_number: "H1285 / G1242",
        definition: "A solemn agreement, treaty. A binding promise between God and His people.",
        etymology: Some("From 'barah' (to cut)"),
    },
    Definition {
        word: "promise",
        original: "דָּבָר / ἐπαγγελία",
        transliteration: "davar / epangelia",
        strongs_number: "H1697 / G1860",
        definition: "A word given, pledge. God's declared intention to bless.",
        etymology: Some("From 'dabar' (to speak)"),
    },
    // Worship/Praise
    Definition {
        word: "worship",
        original: "שָׁחָה / προσκυνέω",
        transliteration: "shachah / proskyneō",
        strongs_number: "H7812 / G4352",
        definition: "To bow down, prostrate oneself. To give reverence and honor to God.",
        etymology: Some("To depress, bow down"),
    },
    Definition {
        word: "praise",
        original: "תְּהִלָּה / αἶνος",
        transliteration: "tehillah / ainos",
        strongs_number: "H8416 / G136",
        definition: "Song of praise, commendation. To celebrate and glorify God.",
        etymology: Some("From 'halal' (to shine, boast)"),
    },
    // Sin/Forgiveness
    Definition {
        word: "sin",
        original: "חַטָּאָה / ἁμαρτία",
        transliteration: "chatta'ah / hamartia",
        strongs_number: "H2403 / G266",
        definition: "Missing the mark, offense, wrongdoing. Rebellion against God's law.",
        etymology: Some("To miss, fail"),
    },
    Definition {
        word: "forgive",
        original: "סָלַח / ἀφίημι",
        transliteration: "salach / aphiēmi",
        strongs_number: "H5545 / G863",
        definition: "To pardon, let go. To release from guilt and penalty.",
        etymology: Some("To send away, release"),
    },
    // Strength/Power
    Definition {
        word: "strength",
        original: "עֹז / δύναμις",
        transliteration: "oz / dynamis",
        strongs_number: "H5797 / G1411",
        definition: "Might, power, force. God's enabling power.",
        etymology: Some("To be strong, mighty"),
    },
    Definition {
        word: "power",
        original: "כֹּחַ / ἐξουσία",
        transliteration: "koach / exousia",
        strongs_number: "H3581 / G1849",
        definition: "Ability, capacity. Authority and right to exercise power.",
        etymology: Some("Vigor, strength"),
    },
    // Heart/Soul
    Definition {
        word: "heart",
        original: "לֵב / καρδία",
        transliteration: "lev / kardia",
        strongs_number: "H3820 / G2588",
        definition: "Inner person, mind, will, emotions. The center of one's being.",
        etymology: Some("The inner self"),
    },
    Definition {
        word: "soul",
        original: "נֶפֶשׁ / ψυχή",
        transliteration: "nephesh / psychē",
        strongs_number: "H5315 / G5590",
        definition: "Life, self, person. The immaterial essence that animates the body.",
        etymology: Some("Breathing creature"),
    },
    // Joy/Blessing
    Definition {
        word: "joy",
        original: "שִׂמְחָה / χαρά",
        transliteration: "simchah / chara",
        strongs_number: "H8057 / G5479",
        definition: "Gladness, delight, celebration. Deep spiritual happiness.",
        etymology: Some("From 'samach' (to rejoice)"),
    },
    Definition {
        word: "blessed",
        original: "בָּרוּךְ / μακάριος",
        transliteration: "baruch / makarios",
        strongs_number: "H1288 / G3107",
        definition: "Happy, fortunate, favored by God. Supremely blessed.",
        etymology: Some("To kneel, bless"),
    },
    // Holy/Clean
    Definition {
        word: "holy",
        original: "קָדוֹשׁ / ἅγιος",
        transliteration: "qadosh / hagios",
        strongs_number: "H6918 / G40",
        definition: "Set apart, sacred, consecrated. Morally and spiritually pure.",
        etymology: Some("To be separate, sacred"),
    },
    Definition {
        word: "pure",
        original: "טָהוֹר / καθαρός",
        transliteration: "tahor / katharos",
        strongs_number: "H2889 / G2513",
        definition: "Clean, undefiled. Free from moral impurity.",
        etymology: Some("To be clean, pure"),
    },
];

/// Strips the fixed punctuation set and lowercases for matching.
fn canonicalize(word: &str) -> String {
    word.chars()
        .filter(|c| !matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '"' | '\''))
        .collect::<String>()
        .to_lowercase()
}

/// Finds the definition for a word, if the lexicon has one.
pub fn lookup(word: &str) -> Option<&'static Definition> {
    let normalized = canonicalize(word);
    if normalized.is_empty() {
        return None;
    }
    DEFINITIONS
        .iter()
        .find(|def| def.word.to_lowercase() == normalized)
}

/// The distinct defined words present in a verse body, in order of first
/// appearance. Drives the word-lookup overlay.
pub fn words_with_definitions(text: &str) -> Vec<&'static Definition> {
    let mut found: Vec<&'static Definition> = Vec::new();
    for raw in text.split_whitespace() {
        if let Some(def) = lookup(raw)
            && !found.iter().any(|d| d.word == def.word)
        {
            found.push(def);
        }
    }
    found
}
