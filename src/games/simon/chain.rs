use crate::error::SimonError;
use crate::games::simon::color::{Color, ColorSource};

/// Hard ceiling on chain length. Far beyond any human session.
pub const MAX_CHAIN_LEN: usize = 1024;

/// The sequence the player has to repeat. Grows one link per round and is
/// only ever cleared as a whole.
#[derive(Debug, Clone)]
pub struct MemoryChain {
    links: Vec<Color>,
    capacity: usize,
}

impl Default for MemoryChain {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryChain {
    pub fn new() -> Self {
        Self::with_capacity(MAX_CHAIN_LEN)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { links: Vec::with_capacity(capacity), capacity }
    }

    /// Append one freshly drawn link and return it.
    pub fn extend(&mut self, source: &mut impl ColorSource) -> Result<Color, SimonError> {
        if self.links.len() >= self.capacity {
            return Err(SimonError::ChainExhausted { capacity: self.capacity });
        }
        let color = source.next_color();
        self.links.push(color);
        Ok(color)
    }

    /// Link at `index`, or `None` past the filled part.
    pub fn at(&self, index: usize) -> Option<Color> {
        self.links.get(index).copied()
    }

    pub fn reset(&mut self) {
        self.links.clear();
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn links(&self) -> &[Color] {
        &self.links
    }
}

impl From<Vec<Color>> for MemoryChain {
    fn from(links: Vec<Color>) -> Self {
        let capacity = MAX_CHAIN_LEN.max(links.len());
        Self { links, capacity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::simon::color::RandomColorGenerator;

    #[test]
    fn test_extend_fills_prefix_only() {
        let mut colors = RandomColorGenerator::from_seed(3);
        let mut chain = MemoryChain::new();

        for score in 0..20 {
            chain.extend(&mut colors).unwrap();
            for i in 0..=score {
                assert!(chain.at(i).is_some(), "link {i} missing at score {score}");
            }
            assert_eq!(chain.at(score + 1), None);
            assert_eq!(chain.at(MAX_CHAIN_LEN), None);
        }
    }

    #[test]
    fn test_extend_never_rewrites_earlier_links() {
        let mut colors = RandomColorGenerator::from_seed(11);
        let mut chain = MemoryChain::new();
        chain.extend(&mut colors).unwrap();
        let first = chain.at(0);

        for _ in 0..10 {
            chain.extend(&mut colors).unwrap();
        }
        assert_eq!(chain.at(0), first);
    }

    #[test]
    fn test_reset_clears_every_position() {
        let mut colors = RandomColorGenerator::from_seed(5);
        let mut chain = MemoryChain::new();
        for _ in 0..8 {
            chain.extend(&mut colors).unwrap();
        }

        chain.reset();

        assert!(chain.is_empty());
        for i in 0..16 {
            assert_eq!(chain.at(i), None);
        }
    }

    #[test]
    fn test_extend_past_capacity_is_fatal() {
        let mut colors = RandomColorGenerator::from_seed(1);
        let mut chain = MemoryChain::with_capacity(2);
        chain.extend(&mut colors).unwrap();
        chain.extend(&mut colors).unwrap();

        let err = chain.extend(&mut colors).unwrap_err();
        assert!(matches!(err, SimonError::ChainExhausted { capacity: 2 }));
        assert_eq!(chain.len(), 2);
    }
}
