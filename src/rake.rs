// Rake shapes. Each rake is a list of tooth offsets (pixels above/below the pointer).
// Visual: more teeth = more parallel furrows per stroke.

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RakeProfile {
    pub name: String,
    pub teeth: Vec<i32>, // relative Y per tooth, applied in this order
}

impl RakeProfile {
    /// Smallest and largest offset; the spine of the rake glyph spans these.
    pub fn extent(&self) -> (i32, i32) {
        let lo = self.teeth.iter().copied().min().unwrap_or(0);
        let hi = self.teeth.iter().copied().max().unwrap_or(0);
        (lo, hi)
    }
}

/// Fixed set of rakes with exactly one active.
#[derive(Debug, Clone)]
pub struct RakeRegistry {
    profiles: Vec<RakeProfile>,
    active: usize,
}

impl RakeRegistry {
    /// Build the registry and activate `default`.
    /// Fails when there are no rakes, a rake has no teeth, or `default` is unknown.
    pub fn new(rakes: &[(String, Vec<i32>)], default: &str) -> Result<Self, Error> {
        if rakes.is_empty() {
            return Err(Error::EmptyRakeSet);
        }

        let mut profiles: Vec<RakeProfile> = Vec::with_capacity(rakes.len());
        for (name, teeth) in rakes {
            if teeth.is_empty() {
                return Err(Error::EmptyRake(name.clone()));
            }
            // Later duplicates replace earlier ones, like map insertion.
            profiles.retain(|p| &p.name != name);
            profiles.push(RakeProfile { name: name.clone(), teeth: teeth.clone() });
        }

        let mut registry = Self { profiles, active: 0 };
        registry.select(default)?;
        Ok(registry)
    }

    /// Switch the active rake. Unknown names leave the current rake in place.
    pub fn select(&mut self, name: &str) -> Result<&RakeProfile, Error> {
        let idx = self
            .profiles
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| Error::UnknownRake(name.to_string()))?;
        self.active = idx;
        Ok(&self.profiles[idx])
    }

    pub fn active(&self) -> &RakeProfile {
        &self.profiles[self.active]
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }
}
