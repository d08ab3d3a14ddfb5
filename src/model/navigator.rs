//! Cyclic previous/next traversal through a character listing

use super::character::Character;

/// Where the displayed character sits in the traversal listing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Found(usize),
    /// Id absent from the listing; traversal starts from the first entry
    Fallback,
}

impl Anchor {
    pub fn index(self) -> usize {
        match self {
            Anchor::Found(i) => i,
            Anchor::Fallback => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub id: u64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    entries: Vec<NavEntry>,
    anchor: Anchor,
}

impl Navigator {
    pub fn locate(listing: &[Character], id: u64) -> Self {
        let anchor = match listing.iter().position(|c| c.id == id) {
            Some(i) => Anchor::Found(i),
            None => {
                tracing::warn!(id, listing_len = listing.len(), "Character not in navigation listing");
                Anchor::Fallback
            }
        };

        Self {
            entries: listing
                .iter()
                .map(|c| NavEntry {
                    id: c.id,
                    name: c.name.clone(),
                })
                .collect(),
            anchor,
        }
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn previous(&self) -> Option<&NavEntry> {
        if self.entries.is_empty() {
            return None;
        }
        let current = self.anchor.index();
        let index = if current > 0 { current - 1 } else { self.entries.len() - 1 };
        self.entries.get(index)
    }

    pub fn next(&self) -> Option<&NavEntry> {
        if self.entries.is_empty() {
            return None;
        }
        let current = self.anchor.index();
        let index = if current + 1 < self.entries.len() { current + 1 } else { 0 };
        self.entries.get(index)
    }

    /// "2 of 100", or "? of 100" when the character is not in the listing
    pub fn position_label(&self) -> String {
        match self.anchor {
            Anchor::Found(i) => format!("{} of {}", i + 1, self.entries.len()),
            Anchor::Fallback => format!("? of {}", self.entries.len()),
        }
    }
}
