use bitflags::bitflags;
use serde_derive::{Deserialize, Serialize};

use std::{fmt, str::FromStr};

bitflags! {
    /// Persisted stereo mode layout.
    ///
    /// Bits 0 and 4 belong to the renderer (dual buffers, render right)
    /// and are never produced here.
    pub struct StereoFlags: u32 {
        const FIXED = 1 << 1;
        const HORIZ = 1 << 2;
        const VERT = 1 << 3;
        const ANAGLYPH_RC = 1 << 5;
        const ANAGLYPH_GM = 1 << 6;
        const ANAGLYPH_YB = 1 << 7;
        const ANAGLYPH_GRAY_RC = 1 << 8;
        const ANAGLYPH_GRAY_GM = 1 << 9;
        const ANAGLYPH_GRAY_YB = 1 << 10;
        const ANAGLYPH_DB_RC = 1 << 11;
        const ANAGLYPH_DB_GM = 1 << 12;
        const ANAGLYPH_DB_YB = 1 << 13;
        const MIRROR_LEFT = 1 << 14;
        const FLIP_LEFT = 1 << 15;
        const MIRROR_RIGHT = 1 << 16;
        const FLIP_RIGHT = 1 << 17;
        const SWAP = 1 << 18;
        const TEMP_DISABLE = 1 << 19;
        const HALF = 1 << 20;
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Projection {
    None,
    AnaglyphRedCyan,
    AnaglyphGreenMagenta,
    AnaglyphYellowBlue,
    AnaglyphGrayRedCyan,
    AnaglyphGrayGreenMagenta,
    AnaglyphGrayYellowBlue,
    AnaglyphDuboisRedCyan,
    AnaglyphDuboisGreenMagenta,
    AnaglyphDuboisYellowBlue,
    SideBySide,
    TopBottom,
    FixedPosition,
}

impl Projection {
    pub const ALL: [Projection; 13] = [
        Projection::None,
        Projection::AnaglyphRedCyan,
        Projection::AnaglyphGreenMagenta,
        Projection::AnaglyphYellowBlue,
        Projection::AnaglyphGrayRedCyan,
        Projection::AnaglyphGrayGreenMagenta,
        Projection::AnaglyphGrayYellowBlue,
        Projection::AnaglyphDuboisRedCyan,
        Projection::AnaglyphDuboisGreenMagenta,
        Projection::AnaglyphDuboisYellowBlue,
        Projection::SideBySide,
        Projection::TopBottom,
        Projection::FixedPosition,
    ];

    pub fn flag(self) -> StereoFlags {
        use Projection::*;

        match self {
            None => StereoFlags::empty(),
            AnaglyphRedCyan => StereoFlags::ANAGLYPH_RC,
            AnaglyphGreenMagenta => StereoFlags::ANAGLYPH_GM,
            AnaglyphYellowBlue => StereoFlags::ANAGLYPH_YB,
            AnaglyphGrayRedCyan => StereoFlags::ANAGLYPH_GRAY_RC,
            AnaglyphGrayGreenMagenta => StereoFlags::ANAGLYPH_GRAY_GM,
            AnaglyphGrayYellowBlue => StereoFlags::ANAGLYPH_GRAY_YB,
            AnaglyphDuboisRedCyan => StereoFlags::ANAGLYPH_DB_RC,
            AnaglyphDuboisGreenMagenta => StereoFlags::ANAGLYPH_DB_GM,
            AnaglyphDuboisYellowBlue => StereoFlags::ANAGLYPH_DB_YB,
            SideBySide => StereoFlags::HORIZ,
            TopBottom => StereoFlags::VERT,
            FixedPosition => StereoFlags::FIXED,
        }
    }

    pub fn allows_half_size(self) -> bool {
        matches!(self, Projection::SideBySide | Projection::TopBottom)
    }

    pub fn name(self) -> &'static str {
        use Projection::*;

        match self {
            None => "none",
            AnaglyphRedCyan => "anaglyph-red-cyan",
            AnaglyphGreenMagenta => "anaglyph-green-magenta",
            AnaglyphYellowBlue => "anaglyph-yellow-blue",
            AnaglyphGrayRedCyan => "anaglyph-gray-red-cyan",
            AnaglyphGrayGreenMagenta => "anaglyph-gray-green-magenta",
            AnaglyphGrayYellowBlue => "anaglyph-gray-yellow-blue",
            AnaglyphDuboisRedCyan => "anaglyph-dubois-red-cyan",
            AnaglyphDuboisGreenMagenta => "anaglyph-dubois-green-magenta",
            AnaglyphDuboisYellowBlue => "anaglyph-dubois-yellow-blue",
            SideBySide => "side-by-side",
            TopBottom => "top-bottom",
            FixedPosition => "fixed",
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Projection::None
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownProjection(pub String);

impl fmt::Display for UnknownProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown stereo projection {}", self.0)
    }
}

impl std::error::Error for UnknownProjection {}

impl FromStr for Projection {
    type Err = UnknownProjection;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Projection::ALL
            .iter()
            .copied()
            .find(|projection| projection.name() == name)
            .ok_or_else(|| UnknownProjection(name.to_owned()))
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Modifiers {
    pub mirror_left: bool,
    pub flip_left: bool,
    pub mirror_right: bool,
    pub flip_right: bool,
    pub swap_left_right: bool,
    pub temporarily_disabled: bool,
}

impl Modifiers {
    fn from_flags(flags: StereoFlags) -> Self {
        Modifiers {
            mirror_left: flags.contains(StereoFlags::MIRROR_LEFT),
            flip_left: flags.contains(StereoFlags::FLIP_LEFT),
            mirror_right: flags.contains(StereoFlags::MIRROR_RIGHT),
            flip_right: flags.contains(StereoFlags::FLIP_RIGHT),
            swap_left_right: flags.contains(StereoFlags::SWAP),
            temporarily_disabled: flags.contains(StereoFlags::TEMP_DISABLE),
        }
    }

    fn flags(&self) -> StereoFlags {
        let mut flags = StereoFlags::empty();
        flags.set(StereoFlags::MIRROR_LEFT, self.mirror_left);
        flags.set(StereoFlags::FLIP_LEFT, self.flip_left);
        flags.set(StereoFlags::MIRROR_RIGHT, self.mirror_right);
        flags.set(StereoFlags::FLIP_RIGHT, self.flip_right);
        flags.set(StereoFlags::SWAP, self.swap_left_right);
        flags.set(StereoFlags::TEMP_DISABLE, self.temporarily_disabled);
        flags
    }
}

/// A stereo display mode: one projection plus its modifiers.
///
/// Persisted as the integer mask described by [`StereoFlags`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct StereoMode {
    pub projection: Projection,
    /// Only meaningful for side by side and top bottom.
    pub half_size: bool,
    pub modifiers: Modifiers,
}

impl StereoMode {
    pub fn new(projection: Projection) -> Self {
        StereoMode {
            projection,
            ..StereoMode::default()
        }
    }

    /// Decodes a persisted mask, ignoring any bit it doesn't know about.
    ///
    /// Projections are tested in declaration order and the first match wins.
    pub fn decode(mask: u32) -> Self {
        let flags = StereoFlags::from_bits_truncate(mask);

        let projection = Projection::ALL[1..]
            .iter()
            .copied()
            .find(|projection| flags.contains(projection.flag()))
            .unwrap_or(Projection::None);

        StereoMode {
            projection,
            half_size: projection.allows_half_size() && flags.contains(StereoFlags::HALF),
            modifiers: Modifiers::from_flags(flags),
        }
    }

    pub fn encode(&self) -> u32 {
        let mut flags = self.projection.flag() | self.modifiers.flags();
        if self.half_size && self.projection.allows_half_size() {
            flags |= StereoFlags::HALF;
        }

        flags.bits()
    }

    /// Index of this mode in the menu returned by [`StereoMode::choices`].
    ///
    /// A mode with no matching entry (fixed position when it is not offered)
    /// selects the single image entry.
    pub fn choice_index(&self, allow_fixed: bool) -> usize {
        let half_size = self.half_size && self.projection.allows_half_size();
        StereoMode::choices(allow_fixed)
            .iter()
            .position(|choice| {
                choice.projection == self.projection && choice.half_size == half_size
            })
            .unwrap_or(0)
    }

    /// Applies a menu selection: projection and half size are replaced,
    /// modifiers are kept.
    pub fn with_choice(self, index: usize, allow_fixed: bool) -> Self {
        let choice = StereoMode::choices(allow_fixed)
            .get(index)
            .unwrap_or(&STEREO_CHOICES[0]);

        StereoMode {
            projection: choice.projection,
            half_size: choice.half_size,
            modifiers: self.modifiers,
        }
    }

    pub fn choices(allow_fixed: bool) -> &'static [StereoChoice] {
        if allow_fixed {
            &STEREO_CHOICES[..]
        } else {
            &STEREO_CHOICES[..STEREO_CHOICES.len() - 1]
        }
    }
}

impl From<u32> for StereoMode {
    fn from(mask: u32) -> Self {
        StereoMode::decode(mask)
    }
}

impl From<StereoMode> for u32 {
    fn from(mode: StereoMode) -> Self {
        mode.encode()
    }
}

impl fmt::Display for StereoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.projection)?;
        if self.half_size && self.projection.allows_half_size() {
            f.write_str(" half-size")?;
        }

        let modifiers = [
            (self.modifiers.mirror_left, "mirror-left"),
            (self.modifiers.flip_left, "flip-left"),
            (self.modifiers.mirror_right, "mirror-right"),
            (self.modifiers.flip_right, "flip-right"),
            (self.modifiers.swap_left_right, "swap"),
            (self.modifiers.temporarily_disabled, "temp-disable"),
        ];
        for (_, name) in modifiers.iter().filter(|(is_set, _)| *is_set) {
            write!(f, " +{}", name)?;
        }

        Ok(())
    }
}

#[derive(Debug)]
pub struct StereoChoice {
    pub projection: Projection,
    pub half_size: bool,
    pub label: &'static str,
}

const fn choice(projection: Projection, half_size: bool, label: &'static str) -> StereoChoice {
    StereoChoice {
        projection,
        half_size,
        label,
    }
}

// Fixed position must stay last: it is only offered in fullscreen.
static STEREO_CHOICES: [StereoChoice; 15] = [
    choice(Projection::None, false, "Single image"),
    choice(Projection::AnaglyphRedCyan, false, "Anaglyph Red-Cyan"),
    choice(Projection::AnaglyphGreenMagenta, false, "Anaglyph Green-Magenta"),
    choice(Projection::AnaglyphYellowBlue, false, "Anaglyph Yellow-Blue"),
    choice(Projection::AnaglyphGrayRedCyan, false, "Anaglyph Gray Red-Cyan"),
    choice(Projection::AnaglyphGrayGreenMagenta, false, "Anaglyph Gray Green-Magenta"),
    choice(Projection::AnaglyphGrayYellowBlue, false, "Anaglyph Gray Yellow-Blue"),
    choice(Projection::AnaglyphDuboisRedCyan, false, "Anaglyph Dubois Red-Cyan"),
    choice(Projection::AnaglyphDuboisGreenMagenta, false, "Anaglyph Dubois Green-Magenta"),
    choice(Projection::AnaglyphDuboisYellowBlue, false, "Anaglyph Dubois Yellow-Blue"),
    choice(Projection::SideBySide, false, "Side by Side"),
    choice(Projection::SideBySide, true, "Side by Side Half size"),
    choice(Projection::TopBottom, false, "Top - Bottom"),
    choice(Projection::TopBottom, true, "Top - Bottom Half size"),
    choice(Projection::FixedPosition, false, "Fixed position"),
];

/// Which of the two independent stereo modes is being edited.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StereoTarget {
    Windowed,
    Fullscreen,
}

impl StereoTarget {
    pub fn allows_fixed(self) -> bool {
        self == StereoTarget::Fullscreen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_modifiers() -> impl Iterator<Item = Modifiers> {
        (0u8..64).map(|bits| Modifiers {
            mirror_left: bits & 0x01 != 0,
            flip_left: bits & 0x02 != 0,
            mirror_right: bits & 0x04 != 0,
            flip_right: bits & 0x08 != 0,
            swap_left_right: bits & 0x10 != 0,
            temporarily_disabled: bits & 0x20 != 0,
        })
    }

    #[test]
    fn anaglyph_mirror_swap() {
        let mask = (StereoFlags::ANAGLYPH_RC | StereoFlags::MIRROR_LEFT | StereoFlags::SWAP).bits();

        let mode = StereoMode::decode(mask);
        assert_eq!(Projection::AnaglyphRedCyan, mode.projection);
        assert!(!mode.half_size);
        assert_eq!(
            Modifiers {
                mirror_left: true,
                swap_left_right: true,
                ..Modifiers::default()
            },
            mode.modifiers,
        );

        assert_eq!(mask, mode.encode());
    }

    #[test]
    fn split_projections_round_trip() {
        for &projection in &[Projection::SideBySide, Projection::TopBottom] {
            for half_size in [false, true] {
                for modifiers in all_modifiers() {
                    let mode = StereoMode {
                        projection,
                        half_size,
                        modifiers,
                    };
                    assert_eq!(mode, StereoMode::decode(mode.encode()));
                }
            }
        }
    }

    #[test]
    fn half_size_ignored_without_split() {
        let others = Projection::ALL
            .iter()
            .copied()
            .filter(|projection| !projection.allows_half_size());

        for projection in others {
            let mode = StereoMode {
                projection,
                half_size: true,
                modifiers: Modifiers {
                    flip_right: true,
                    temporarily_disabled: true,
                    ..Modifiers::default()
                },
            };

            let decoded = StereoMode::decode(mode.encode());
            assert_eq!(projection, decoded.projection);
            assert!(!decoded.half_size);
            assert_eq!(mode.modifiers, decoded.modifiers);
            assert_eq!(0, mode.encode() & StereoFlags::HALF.bits());
        }
    }

    #[test]
    fn unrecognized_bits_dropped() {
        let reserved = (1 << 0) | (1 << 4) | (1 << 21) | (1 << 31);
        let mask = StereoFlags::HORIZ.bits() | StereoFlags::HALF.bits() | reserved;

        let mode = StereoMode::decode(mask);
        assert_eq!(Projection::SideBySide, mode.projection);
        assert!(mode.half_size);
        assert_eq!(mask & !reserved, mode.encode());

        assert_eq!(StereoMode::default(), StereoMode::decode(reserved));
        assert_eq!(0, StereoMode::decode(reserved).encode());
    }

    #[test]
    fn normalization_is_idempotent() {
        let samples = [
            0,
            1,
            0x0010_0004,
            0x0010_0020,
            0x0000_0006,
            0x0003_ffff,
            0x00ff_ff00,
            0xdead_beef,
            0x8000_0001,
            u32::MAX,
        ];

        for &mask in samples.iter() {
            let once = StereoMode::decode(mask).encode();
            assert_eq!(once, StereoMode::decode(once).encode(), "mask {:#x}", mask);
            assert_eq!(0, once & !StereoFlags::all().bits());
        }
    }

    #[test]
    fn first_projection_wins() {
        // Hand edited masks may carry several projections.
        let mask = (StereoFlags::ANAGLYPH_GM | StereoFlags::HORIZ | StereoFlags::FIXED).bits();
        assert_eq!(Projection::AnaglyphGreenMagenta, StereoMode::decode(mask).projection);

        let mask = (StereoFlags::VERT | StereoFlags::HORIZ | StereoFlags::HALF).bits();
        let mode = StereoMode::decode(mask);
        assert_eq!(Projection::SideBySide, mode.projection);
        assert!(mode.half_size);

        let mask = (StereoFlags::VERT | StereoFlags::FIXED).bits();
        assert_eq!(Projection::TopBottom, StereoMode::decode(mask).projection);
    }

    #[test]
    fn fixed_position_choice() {
        let fixed = StereoMode::decode(StereoFlags::FIXED.bits());
        assert_eq!(Projection::FixedPosition, fixed.projection);

        assert_eq!(14, StereoMode::choices(false).len());
        assert_eq!(15, StereoMode::choices(true).len());

        assert_eq!(14, fixed.choice_index(true));
        assert_eq!(0, fixed.choice_index(false));

        let none = StereoMode::default().with_choice(14, false);
        assert_eq!(Projection::None, none.projection);
        let fixed = StereoMode::default().with_choice(14, true);
        assert_eq!(Projection::FixedPosition, fixed.projection);
    }

    #[test]
    fn choice_keeps_modifiers() {
        let mode = StereoMode {
            projection: Projection::AnaglyphYellowBlue,
            half_size: false,
            modifiers: Modifiers {
                mirror_right: true,
                ..Modifiers::default()
            },
        };
        assert_eq!(3, mode.choice_index(false));

        let mode = mode.with_choice(13, false);
        assert_eq!(Projection::TopBottom, mode.projection);
        assert!(mode.half_size);
        assert!(mode.modifiers.mirror_right);
        assert_eq!(13, mode.choice_index(false));

        let mode = mode.with_choice(99, true);
        assert_eq!(Projection::None, mode.projection);
        assert!(!mode.half_size);
        assert!(mode.modifiers.mirror_right);
    }

    #[test]
    fn projection_names() {
        for &projection in Projection::ALL.iter() {
            assert_eq!(Ok(projection), projection.name().parse::<Projection>());
        }
        assert_eq!(
            Err(UnknownProjection("sideways".to_owned())),
            "sideways".parse::<Projection>(),
        );
    }

    #[test]
    fn persisted_as_mask() {
        let mode = StereoMode {
            projection: Projection::SideBySide,
            half_size: true,
            modifiers: Modifiers {
                swap_left_right: true,
                ..Modifiers::default()
            },
        };

        let serialized = ron::ser::to_string(&mode).unwrap();
        assert_eq!(mode.encode().to_string(), serialized);
        assert_eq!(mode, ron::de::from_str::<StereoMode>(&serialized).unwrap());
    }
}
