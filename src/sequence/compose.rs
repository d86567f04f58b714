use std::{fmt, rc::Rc};

use crate::{
    foundation::core::SizeExpr,
    render::node::{Element, Node},
    slide::item::Item,
};

/// Attribute carrying each occurrence's key on the rendered slide.
pub const OCCURRENCE_KEY_ATTR: &str = "data-marquee-key";

/// Number of adjacent copies laid out on the track.
pub const REPLICA_COUNT: usize = 3;

/// Which of the three copies an occurrence belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReplicaTag {
    /// First copy, visible at animation start for leftward scroll.
    A,
    /// Middle copy.
    B,
    /// Trailing copy.
    C,
}

impl ReplicaTag {
    /// All tags in track order.
    pub const ALL: [ReplicaTag; REPLICA_COUNT] = [Self::A, Self::B, Self::C];

    /// Short tag used in occurrence keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
        }
    }
}

/// Stable key of one rendered occurrence: `{replica}-{index}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OccurrenceKey {
    /// Copy this occurrence belongs to.
    pub replica: ReplicaTag,
    /// Position of the item in the source sequence.
    pub index: usize,
}

impl fmt::Display for OccurrenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.replica.as_str(), self.index)
    }
}

/// The caller's items, normalized into a concrete ordered, shared list.
///
/// Cloning shares the underlying storage; the compositor never copies items.
#[derive(Clone, Debug, Default)]
pub struct Items(Rc<[Item]>);

impl Items {
    /// Number of source items.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when there is nothing to scroll.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }

    /// Borrow the underlying slice.
    pub fn as_slice(&self) -> &[Item] {
        &self.0
    }

    /// `true` when both lists share storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Items {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl Eq for Items {}

impl From<Item> for Items {
    fn from(value: Item) -> Self {
        Self(Rc::from(vec![value]))
    }
}

impl From<Option<Item>> for Items {
    fn from(value: Option<Item>) -> Self {
        value.into_iter().collect()
    }
}

impl From<Vec<Item>> for Items {
    fn from(value: Vec<Item>) -> Self {
        Self(Rc::from(value))
    }
}

impl<const N: usize> From<[Item; N]> for Items {
    fn from(value: [Item; N]) -> Self {
        value.into_iter().collect()
    }
}

impl FromIterator<Item> for Items {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> serde::Deserialize<'de> for Items {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Many(Vec<Item>),
            One(Item),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Many(items) => items.into(),
            Repr::One(item) => item.into(),
        })
    }
}

/// One emitted occurrence: its key and the shared item it renders.
#[derive(Clone, Copy, Debug)]
pub struct Occurrence<'a> {
    /// Unique key across all occurrences.
    pub key: OccurrenceKey,
    /// Source item.
    pub item: &'a Item,
}

/// The source items laid out three times, each occurrence carrying the slide width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplicatedSequence {
    items: Items,
    width: SizeExpr,
}

impl ReplicatedSequence {
    /// Number of items in one copy (`n`).
    pub fn source_len(&self) -> usize {
        self.items.len()
    }

    /// Total occurrences on the track (`3n`).
    pub fn len(&self) -> usize {
        self.items.len() * REPLICA_COUNT
    }

    /// `true` when the track has no occurrences.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Width injected into every occurrence.
    pub fn width(&self) -> &SizeExpr {
        &self.width
    }

    /// The shared source list.
    pub fn items(&self) -> &Items {
        &self.items
    }

    /// Occurrences of a single copy, in source order.
    pub fn group(&self, replica: ReplicaTag) -> impl Iterator<Item = Occurrence<'_>> {
        self.items
            .iter()
            .enumerate()
            .map(move |(index, item)| Occurrence {
                key: OccurrenceKey { replica, index },
                item,
            })
    }

    /// All occurrences in track order: `a-0..a-n, b-0..b-n, c-0..c-n`.
    pub fn occurrences(&self) -> impl Iterator<Item = Occurrence<'_>> {
        ReplicaTag::ALL
            .into_iter()
            .flat_map(move |replica| self.group(replica))
    }

    /// Render every occurrence as a slide.
    pub fn render(&self) -> Vec<Node> {
        self.occurrences()
            .map(|occ| {
                let mut slide: Element = occ.item.render(&self.width);
                slide.set_attr(OCCURRENCE_KEY_ATTR, occ.key.to_string());
                Node::Element(slide)
            })
            .collect()
    }
}

/// Normalize `items` and replicate them for a seamless wrap.
///
/// Three adjacent copies are the minimum that keeps the viewport backed by content at every
/// animation progress value in either direction. An empty input yields three empty groups.
pub fn compose(items: impl Into<Items>, width: &SizeExpr) -> ReplicatedSequence {
    ReplicatedSequence {
        items: items.into(),
        width: width.clone(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/compose.rs"]
mod tests;
