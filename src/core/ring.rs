use std::collections::HashMap;
use std::hash::Hash;

use super::AssassinError;

/// The result of splicing a player out of a ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice<P> {
    /// The player that was hunting the eliminated player.
    pub assassin: P,
    /// The player that was removed.
    pub eliminated: P,
    /// Who the assassin hunts now. `None` when the assassin was the
    /// last one standing.
    pub new_target: Option<P>,
}

/// `TargetRing` is the who hunts whom mapping for a game.
///
/// Every member of the ring has exactly one target and is the target
/// of exactly one other member. Following targets from anyone visits
/// every member before coming back around.
///
/// Rings are usually created by [`super::generate_cycle`] and then shrink
/// as players are eliminated.
#[derive(Debug, Clone)]
pub struct TargetRing<P> {
    /// Everyone that was ever in the ring, in roster order.
    players: Vec<P>,
    /// Player to position in `players`.
    index: HashMap<P, usize>,
    /// Position of each player's target. `None` once out of the ring.
    targets: Vec<Option<usize>>,
    /// Position of the player hunting each player.
    assassins: Vec<Option<usize>>,
    /// How many players are still in the ring.
    members: usize,
}

impl<P> Default for TargetRing<P> {
    fn default() -> Self {
        Self {
            players: vec![],
            index: HashMap::new(),
            targets: vec![],
            assassins: vec![],
            members: 0,
        }
    }
}

impl<P: Clone + Eq + Hash> TargetRing<P> {
    /// Build from distinct players and a position chain where
    /// `chain[i]` is the position targeted by `players[i]`.
    pub(crate) fn from_chain(players: Vec<P>, chain: Vec<usize>) -> Self {
        let mut assassins = vec![None; chain.len()];
        for (idx, target) in chain.iter().enumerate() {
            assassins[*target] = Some(idx);
        }
        let index = players
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.clone(), idx))
            .collect();
        Self {
            members: players.len(),
            players,
            index,
            targets: chain.into_iter().map(Some).collect(),
            assassins,
        }
    }

    /// Rebuild a ring from `(player, target)` pairs, for example the
    /// current targets that were persisted for a game.
    ///
    /// The pairs are checked, so this will refuse anything that isn't a
    /// single cycle over all the players.
    ///
    /// ```
    /// use assassin::core::TargetRing;
    ///
    /// let ring = TargetRing::from_pairs(vec![(1, 2), (2, 3), (3, 1)]).unwrap();
    /// assert_eq!(Some(&1), ring.assassin_of(&2));
    ///
    /// // Two separate hunts is not a ring.
    /// assert!(TargetRing::from_pairs(vec![(1, 2), (2, 1), (3, 4), (4, 3)]).is_err());
    /// ```
    pub fn from_pairs<I>(pairs: I) -> Result<Self, AssassinError>
    where
        I: IntoIterator<Item = (P, P)>,
    {
        let pairs: Vec<(P, P)> = pairs.into_iter().collect();
        let mut index: HashMap<P, usize> = HashMap::with_capacity(pairs.len());
        for (idx, (player, _)) in pairs.iter().enumerate() {
            if let Some(first) = index.insert(player.clone(), idx) {
                return Err(AssassinError::DuplicatePlayer { first, second: idx });
            }
        }

        let mut chain = Vec::with_capacity(pairs.len());
        let mut assassins = vec![None; pairs.len()];
        for (idx, (_, target)) in pairs.iter().enumerate() {
            let target_idx = *index.get(target).ok_or_else(|| {
                AssassinError::BrokenRing(format!("target of position {idx} isn't in the ring"))
            })?;
            if assassins[target_idx].replace(idx).is_some() {
                return Err(AssassinError::BrokenRing(format!(
                    "position {target_idx} is targeted more than once"
                )));
            }
            chain.push(Some(target_idx));
        }

        let ring = Self {
            members: pairs.len(),
            players: pairs.into_iter().map(|(p, _)| p).collect(),
            index,
            targets: chain,
            assassins,
        };
        ring.validate()?;
        Ok(ring)
    }

    /// Remove a player from the ring. Whoever was hunting them now
    /// hunts their old target.
    ///
    /// When only two players are left the survivor has nobody left
    /// to hunt, so they leave the ring too and the ring ends up empty.
    ///
    /// ```
    /// use assassin::core::TargetRing;
    ///
    /// let mut ring = TargetRing::from_pairs(vec![("a", "b"), ("b", "c"), ("c", "a")]).unwrap();
    /// let splice = ring.eliminate(&"b").unwrap();
    ///
    /// assert_eq!("a", splice.assassin);
    /// assert_eq!(Some("c"), splice.new_target);
    /// assert_eq!(Some(&"c"), ring.target_of(&"a"));
    /// ```
    pub fn eliminate(&mut self, player: &P) -> Result<Splice<P>, AssassinError> {
        let pos = self.position(player).ok_or(AssassinError::UnknownPlayer)?;
        let (Some(next), Some(pred)) = (self.targets[pos], self.assassins[pos]) else {
            return Err(AssassinError::BrokenRing(format!(
                "position {pos} is missing a link"
            )));
        };

        self.targets[pos] = None;
        self.assassins[pos] = None;
        self.members = self.members.saturating_sub(1);

        let new_target = if next == pred {
            // Head to head. The assassin is the last one standing.
            self.targets[pred] = None;
            self.assassins[pred] = None;
            self.members = self.members.saturating_sub(1);
            None
        } else {
            self.targets[pred] = Some(next);
            self.assassins[next] = Some(pred);
            Some(self.players[next].clone())
        };

        Ok(Splice {
            assassin: self.players[pred].clone(),
            eliminated: self.players[pos].clone(),
            new_target,
        })
    }

    /// Consume the ring producing the player to target map.
    pub fn into_map(self) -> HashMap<P, P> {
        self.iter().map(|(p, t)| (p.clone(), t.clone())).collect()
    }
}

impl<P: Eq + Hash> TargetRing<P> {
    fn position(&self, player: &P) -> Option<usize> {
        self.index
            .get(player)
            .copied()
            .filter(|idx| self.targets[*idx].is_some())
    }

    /// How many players are in the ring.
    pub fn len(&self) -> usize {
        self.members
    }

    /// Is nobody left hunting?
    pub fn is_empty(&self) -> bool {
        self.members == 0
    }

    /// Is this player still in the ring?
    pub fn contains(&self, player: &P) -> bool {
        self.position(player).is_some()
    }

    /// Who is this player hunting.
    pub fn target_of(&self, player: &P) -> Option<&P> {
        let pos = self.position(player)?;
        self.targets[pos].map(|t| &self.players[t])
    }

    /// Who is hunting this player.
    pub fn assassin_of(&self, player: &P) -> Option<&P> {
        let pos = self.position(player)?;
        self.assassins[pos].map(|a| &self.players[a])
    }

    /// Iterate over `(player, target)` pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (&P, &P)> {
        self.players
            .iter()
            .zip(self.targets.iter())
            .filter_map(|(p, t)| t.map(|t| (p, &self.players[t])))
    }

    /// Follow the targets starting at `start`. The walk yields `start`
    /// first and stops before coming back around to it.
    pub fn walk(&self, start: &P) -> RingWalk<'_, P> {
        let start = self.position(start);
        RingWalk {
            ring: self,
            start: start.unwrap_or_default(),
            current: start,
            remaining: self.members,
        }
    }

    /// Check that the ring is one cycle covering every member with no
    /// one hunting themself.
    pub fn validate(&self) -> Result<(), AssassinError> {
        if self.members == 0 {
            return Ok(());
        }

        let mut start = None;
        for (pos, target) in self.targets.iter().enumerate() {
            let Some(target) = *target else {
                continue;
            };
            if target == pos {
                return Err(AssassinError::BrokenRing(format!(
                    "position {pos} targets itself"
                )));
            }
            if self.assassins[target] != Some(pos) {
                return Err(AssassinError::BrokenRing(format!(
                    "position {target} doesn't know it's hunted by {pos}"
                )));
            }
            start.get_or_insert(pos);
        }

        let Some(start) = start else {
            return Err(AssassinError::BrokenRing(format!(
                "{} members but no targets",
                self.members
            )));
        };

        let mut steps = 0;
        let mut pos = start;
        loop {
            pos = self.targets[pos].ok_or_else(|| {
                AssassinError::BrokenRing(format!("position {pos} leads out of the ring"))
            })?;
            steps += 1;
            if pos == start || steps > self.members {
                break;
            }
        }

        if steps != self.members {
            return Err(AssassinError::BrokenRing(format!(
                "cycle of length {steps} doesn't cover all {} members",
                self.members
            )));
        }
        Ok(())
    }
}

/// Iterator created by [`TargetRing::walk`].
pub struct RingWalk<'a, P> {
    ring: &'a TargetRing<P>,
    start: usize,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, P> Iterator for RingWalk<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.current = self.ring.targets[current].filter(|next| *next != self.start);
        Some(&self.ring.players[current])
    }
}
