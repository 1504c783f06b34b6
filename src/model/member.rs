//! Member model — one person entity in a family tree

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gender of a member
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[default]
    Unknown,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::Unknown => "unknown",
        }
    }
}

/// One person in a family tree
///
/// `generation` orders members vertically by ancestry depth; 0 is an
/// arbitrary baseline and values grow downward (children are higher numbers,
/// ancestors lower). It is adjusted as a side effect of relationship
/// creation, one hop at a time — see [`crate::graph::propagation`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub id: Uuid,

    /// The tree this member belongs to; relationships never cross trees.
    pub tree_id: Uuid,

    pub given_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maiden_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    pub gender: Gender,

    /// Birth timestamp (epoch-millis semantics on the wire)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_date: Option<DateTime<Utc>>,

    pub living: bool,

    /// Signed generation number, 0 = arbitrary baseline
    pub generation: i32,

    /// Whether this member sits on the paternal line of the tree
    pub paternal_line: bool,
}

impl Member {
    pub fn new(tree_id: Uuid, given_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tree_id,
            given_name: given_name.into(),
            family_name: None,
            maiden_name: None,
            nickname: None,
            gender: Gender::Unknown,
            birth_date: None,
            death_date: None,
            living: true,
            generation: 0,
            paternal_line: false,
        }
    }

    pub fn with_family_name(mut self, family_name: impl Into<String>) -> Self {
        self.family_name = Some(family_name.into());
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_birth_date(mut self, birth_date: DateTime<Utc>) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    pub fn with_death_date(mut self, death_date: DateTime<Utc>) -> Self {
        self.death_date = Some(death_date);
        self.living = false;
        self
    }

    pub fn with_generation(mut self, generation: i32) -> Self {
        self.generation = generation;
        self
    }

    /// Display label: nickname when set, otherwise given + family name
    pub fn display_name(&self) -> String {
        if let Some(nick) = &self.nickname {
            return nick.clone();
        }
        match &self.family_name {
            Some(family) => format!("{} {}", self.given_name, family),
            None => self.given_name.clone(),
        }
    }
}
