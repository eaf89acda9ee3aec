use serde::{Deserialize, Serialize};

/// Synthetic identifier assigned to an entrant when the roster is built.
/// Equal to the entrant's position in the input list, so two entrants that
/// share a name still have distinct ids.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct EntrantId(pub usize);

/// A tournament participant.
/// Conflict detection keys on [`EntrantId`]; the name is only for display.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Entrant {
    id: EntrantId,
    name: String,
}

impl Entrant {
    pub fn new(id: EntrantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> EntrantId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The ordered list of entrants read from the input source.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Roster {
    entrants: Vec<Entrant>,
}

impl Roster {
    /// Builds a roster, numbering entrants in input order.
    ///
    /// ```
    /// use chessort_engine::entrant::{EntrantId, Roster};
    ///
    /// let roster = Roster::from_names(["Ana", "Ana", "Luis"]);
    /// assert_eq!(roster.len(), 3);
    /// assert_eq!(roster.entrants()[1].id(), EntrantId(1));
    /// assert_ne!(roster.entrants()[0].id(), roster.entrants()[1].id());
    /// ```
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entrants = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Entrant::new(EntrantId(i), name))
            .collect();
        Self { entrants }
    }

    pub fn entrants(&self) -> &[Entrant] {
        &self.entrants
    }

    pub fn into_entrants(self) -> Vec<Entrant> {
        self.entrants
    }

    pub fn len(&self) -> usize {
        self.entrants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrants.is_empty()
    }
}
