//! Selection vocabularies for free-text identity and damage fields.
//!
//! The payload keeps these fields as plain strings; the lists only drive
//! pickers and validation hints.

pub const RACE_OPTIONS: &[&str] = &[
    "HUMANO",
    "ELFO",
    "ANAO",
    "HALFLING",
    "GNOMO",
    "MEIO_ELFO",
    "MEIO_ORC",
    "TIEFLING",
    "DRACONATO",
    "AASIMAR",
    "ORC",
    "GOBLIN",
    "HOBGOBLIN",
    "BUGBEAR",
    "KOBOLD",
    "FIRBOLG",
    "KENKU",
    "TABAXI",
    "LIZARDFOLK",
    "TORTLE",
    "GITH",
    "WARFORGED",
    "CHANGELING",
    "SHIFTER",
    "KALASHTAR",
    "FAIRY",
];

pub const SUB_RACE_OPTIONS: &[&str] = &[
    "ALTO_ELFO",
    "ELFO_DA_FLORESTA",
    "DROW",
    "ELADRIN",
    "SHADAR_KAI",
    "ASTRAL_ELFO",
    "ANAO_DA_COLINA",
    "ANAO_DA_MONTANHA",
    "DUERGAR",
    "PES_LEVES",
    "ROBUSTO",
    "GNOMO_DA_FLORESTA",
    "GNOMO_DAS_ROCHAS",
    "GNOMO_PROFUNDO",
    "TIEFLING_INFERNAL",
    "AASIMAR_PROTETOR",
    "AASIMAR_FLAGELADO",
    "AASIMAR_CAIDO",
    "GITHYANKI",
    "GITHZERAI",
];

pub const ANCESTRY_OPTIONS: &[&str] = &[
    "DRACONICO_CROMATICO",
    "DRACONICO_METALICO",
    "DRACONICO_GEMA",
    "DRAGAO_VERMELHO",
    "DRAGAO_AZUL",
    "DRAGAO_VERDE",
    "DRAGAO_PRETO",
    "DRAGAO_BRANCO",
    "DRAGAO_DOURADO",
    "DRAGAO_PRATEADO",
    "DRAGAO_BRONZE",
    "DRAGAO_COBRE",
    "DRAGAO_LATAO",
    "DRAGAO_AMETISTA",
    "DRAGAO_CRISTAL",
    "DRAGAO_ESMERALDA",
    "DRAGAO_SAFIRA",
    "DRAGAO_TOPAZIO",
    "INFERNAL_ASMODEUS",
    "INFERNAL_BAALZEBUL",
    "INFERNAL_DISPATER",
    "INFERNAL_MEPHISTOPHELES",
    "INFERNAL_ZARIEL",
    "CELESTIAL",
    "CAIDO",
    "PROTETOR",
];

pub const DAMAGE_TYPE_OPTIONS: &[&str] = &[
    "CORTANTE",
    "PERFURANTE",
    "CONCUSSAO",
    "FOGO",
    "GELO",
    "TROVAO",
    "NECROTICO",
    "RADIANTE",
    "ACIDO",
    "VENENO",
    "PSIQUICO",
    "FORCE",
];

/// Whether `value` is blank or one of `options`.
///
/// Blank counts as known: an unselected picker is a valid form state.
pub fn is_known_option(options: &[&str], value: &str) -> bool {
    value.is_empty() || options.contains(&value)
}
