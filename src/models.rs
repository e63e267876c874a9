use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const DEFAULT_MOVE_POWER: u32 = 50;
pub const DEFAULT_MOVE_TYPE: &str = "normal";
pub const DEFAULT_MOVE_NAME: &str = "tackle";
pub const EFFECT_LANGUAGE: &str = "en";

/// Treat an explicit JSON `null` the same as a missing key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `{ "name": ..., "url": ... }` as PokeAPI nests it everywhere.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct NamedResource {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

// ---- upstream: GET {base}/pokemon/{name} ----

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PokemonResource {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub stats: Vec<StatEntry>,
    #[serde(default, deserialize_with = "nullable")]
    pub types: Vec<TypeEntry>,
    #[serde(default, deserialize_with = "nullable")]
    pub moves: Vec<MoveEntry>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StatEntry {
    #[serde(default)]
    pub stat: Option<NamedResource>,
    #[serde(default)]
    pub base_stat: Option<u32>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TypeEntry {
    #[serde(default, rename = "type")]
    pub kind: Option<NamedResource>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MoveEntry {
    #[serde(default, rename = "move")]
    pub reference: Option<NamedResource>,
}

impl PokemonResource {
    /// Stats in upstream order. Entries without a name or value are skipped.
    pub fn base_stats(&self) -> BaseStats {
        self.stats
            .iter()
            .filter_map(|it| {
                let name = it.stat.as_ref()?.name.as_deref()?;
                Some(Stat {
                    name: name.to_string(),
                    base: it.base_stat?,
                })
            })
            .collect()
    }

    pub fn type_names(&self) -> Vec<String> {
        self.types
            .iter()
            .filter_map(|it| it.kind.as_ref()?.name.clone())
            .collect()
    }

    pub fn has_moves(&self) -> bool {
        !self.moves.is_empty()
    }

    /// URL of entry 0 of the move list, never a later one. Purely
    /// positional: no ranking by power or type.
    pub fn first_move_url(&self) -> Option<&str> {
        self.moves.first()?.reference.as_ref()?.url.as_deref()
    }
}

// ---- upstream: GET {move_url} ----

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MoveResource {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(default, rename = "type")]
    pub kind: Option<NamedResource>,
    #[serde(default, deserialize_with = "nullable")]
    pub effect_entries: Vec<EffectEntry>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EffectEntry {
    #[serde(default)]
    pub effect: Option<String>,
    #[serde(default)]
    pub language: Option<NamedResource>,
}

impl EffectEntry {
    fn is_language(&self, lang: &str) -> bool {
        self.language
            .as_ref()
            .and_then(|l| l.name.as_deref())
            == Some(lang)
    }
}

impl MoveResource {
    /// Text of the first English entry. An entry without text does not match.
    pub fn english_effect(&self) -> Option<String> {
        self.effect_entries
            .iter()
            .filter(|e| e.is_language(EFFECT_LANGUAGE))
            .find_map(|e| e.effect.clone())
    }

    /// Collapse the resource into the record, substituting defaults for
    /// anything upstream left out. `effect` has no default.
    pub fn to_record(&self) -> MoveRecord {
        MoveRecord {
            name: self
                .name
                .clone()
                .unwrap_or_else(|| DEFAULT_MOVE_NAME.to_string()),
            power: self.power.unwrap_or(DEFAULT_MOVE_POWER),
            kind: self
                .kind
                .as_ref()
                .and_then(|t| t.name.clone())
                .unwrap_or_else(|| DEFAULT_MOVE_TYPE.to_string()),
            effect: self.english_effect(),
        }
    }
}

// ---- output ----

#[derive(Debug, Serialize, Clone, PartialEq, Eq, Default)]
pub struct Stat {
    pub name: String,
    pub base: u32,
}

/// Stat name -> base value, kept in the order upstream reported them.
///
/// Serializes as a JSON object rather than a list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BaseStats(Vec<Stat>);

impl BaseStats {
    pub fn get(&self, name: &str) -> Option<u32> {
        self.0.iter().find(|s| s.name == name).map(|s| s.base)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stat> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Stat> for BaseStats {
    fn from_iter<I: IntoIterator<Item = Stat>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, u32)> for BaseStats {
    fn from_iter<I: IntoIterator<Item = (&'a str, u32)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(name, base)| Stat {
                name: name.to_string(),
                base,
            })
            .collect()
    }
}

impl Serialize for BaseStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for stat in &self.0 {
            map.serialize_entry(&stat.name, &stat.base)?;
        }
        map.end()
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub name: String,
    pub power: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub effect: Option<String>,
}

/// The assembled result of one successful fetch.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PokemonRecord {
    /// Canonical name as upstream returned it, not the caller's input.
    pub name: String,
    pub base_stats: BaseStats,
    pub types: Vec<String>,
    #[serde(rename = "move")]
    pub first_move: MoveRecord,
}
