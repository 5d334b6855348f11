//! Provides the data structures describing a static RGB scene: the colour and the DMX channels it is written to.

use tinyvec::ArrayVec;

/// Maximum number of RGB channel triples, i.e., `floor(128 / 3)`.
pub const RGB_CHANNELS_CAPACITY: usize = 42;

/// A colour in the red-green-blue domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    /// Red intensity.
    pub red: u8,
    /// Green intensity.
    pub green: u8,
    /// Blue intensity.
    pub blue: u8,
}

impl Rgb {
    /// Constructs an [`Rgb`].
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// The three DMX channels driving the red, green and blue emitters of a single fixture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbChannel {
    /// DMX channel of the red emitter.
    pub red: u8,
    /// DMX channel of the green emitter.
    pub green: u8,
    /// DMX channel of the blue emitter.
    pub blue: u8,
}

impl RgbChannel {
    /// Constructs an [`RgbChannel`].
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// A list of at most [`RGB_CHANNELS_CAPACITY`] [`RgbChannel`]s.
///
/// Construction never fails: oversized input is truncated and missing input yields an empty list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RgbChannels {
    data: ArrayVec<[RgbChannel; RGB_CHANNELS_CAPACITY]>,
}

#[cfg(feature = "defmt")]
impl defmt::Format for RgbChannels {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "RgbChannels {{ data: {} }}", self.data.as_slice());
    }
}

impl RgbChannels {
    /// Constructs an empty [`RgbChannels`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs [`RgbChannels`] from separate lists of red, green and blue DMX channels.
    ///
    /// The `n`th entries of the three lists form the `n`th triple. `size` requests the number of triples; it is clipped
    /// to [`RGB_CHANNELS_CAPACITY`] and to the length of the shortest list. If any of the lists is missing, the result
    /// is empty.
    pub fn from_components(
        size: usize,
        red: Option<&[u8]>,
        green: Option<&[u8]>,
        blue: Option<&[u8]>,
    ) -> Self {
        let (Some(red), Some(green), Some(blue)) = (red, green, blue) else {
            return Self::default();
        };

        red.iter()
            .zip(green)
            .zip(blue)
            .take(size)
            .map(|((&r, &g), &b)| RgbChannel::new(r, g, b))
            .collect()
    }

    /// Returns the number of triples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Determines whether there are no triples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the triple at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&RgbChannel> {
        self.data.get(index)
    }

    /// Returns the red DMX channel of the triple at `index`, or `0` if out of bounds.
    pub fn red(&self, index: usize) -> u8 {
        self.get(index).map_or(0, |ch| ch.red)
    }

    /// Returns the green DMX channel of the triple at `index`, or `0` if out of bounds.
    pub fn green(&self, index: usize) -> u8 {
        self.get(index).map_or(0, |ch| ch.green)
    }

    /// Returns the blue DMX channel of the triple at `index`, or `0` if out of bounds.
    pub fn blue(&self, index: usize) -> u8 {
        self.get(index).map_or(0, |ch| ch.blue)
    }

    /// Returns an [`Iterator`] over the triples, in order.
    pub fn iter(&self) -> impl Iterator<Item = &RgbChannel> {
        self.data.iter()
    }
}

impl FromIterator<RgbChannel> for RgbChannels {
    /// Collects at most [`RGB_CHANNELS_CAPACITY`] triples; the rest are dropped.
    fn from_iter<I: IntoIterator<Item = RgbChannel>>(iter: I) -> Self {
        let mut data = ArrayVec::new();
        data.extend(iter.into_iter().take(RGB_CHANNELS_CAPACITY));
        Self { data }
    }
}
