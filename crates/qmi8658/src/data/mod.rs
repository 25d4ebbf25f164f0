//! Sensor data decoding.

#[cfg(feature = "fixed")]
pub(crate) mod fixed;
pub(crate) mod scale;

pub use scale::{AngularVelocity, Acceleration, Temperature};

/// Length of one X/Y/Z block in bytes.
pub(crate) const AXIS_BLOCK_LEN: usize = 6;

/// Interprets a 16-bit register word as a two's-complement signed value.
pub const fn twos_complement_16(value: u16) -> i16 {
    if value & 0x8000 != 0 {
        (value as i32 - 0x1_0000) as i16
    } else {
        value as i16
    }
}

/// Encodes a signed value as the 16-bit register word it is stored as.
pub const fn to_twos_complement_16(value: i16) -> u16 {
    value as u16
}

/// Assembles a little-endian register pair into a signed word.
pub(crate) const fn le_word(low: u8, high: u8) -> i16 {
    twos_complement_16(((high as u16) << 8) | low as u16)
}

/// Decodes an X/Y/Z block of little-endian words.
pub(crate) const fn decode_axes(bytes: &[u8; AXIS_BLOCK_LEN]) -> [i16; 3] {
    [
        le_word(bytes[0], bytes[1]),
        le_word(bytes[2], bytes[3]),
        le_word(bytes[4], bytes[5]),
    ]
}

/// Raw accelerometer sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelRaw {
    /// X-axis raw count.
    pub x: i16,
    /// Y-axis raw count.
    pub y: i16,
    /// Z-axis raw count.
    pub z: i16,
}

impl AccelRaw {
    pub(crate) const fn from_le_bytes(bytes: &[u8; AXIS_BLOCK_LEN]) -> Self {
        let [x, y, z] = decode_axes(bytes);
        Self { x, y, z }
    }
}

/// Raw gyroscope sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroRaw {
    /// X-axis raw count.
    pub x: i16,
    /// Y-axis raw count.
    pub y: i16,
    /// Z-axis raw count.
    pub z: i16,
}

impl GyroRaw {
    pub(crate) const fn from_le_bytes(bytes: &[u8; AXIS_BLOCK_LEN]) -> Self {
        let [x, y, z] = decode_axes(bytes);
        Self { x, y, z }
    }
}

/// Raw delta-velocity sample. These counts carry no scale factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeltaVelocityRaw {
    /// X-axis raw count.
    pub x: i16,
    /// Y-axis raw count.
    pub y: i16,
    /// Z-axis raw count.
    pub z: i16,
}

impl DeltaVelocityRaw {
    pub(crate) const fn from_le_bytes(bytes: &[u8; AXIS_BLOCK_LEN]) -> Self {
        let [x, y, z] = decode_axes(bytes);
        Self { x, y, z }
    }
}

/// Raw temperature sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureRaw {
    /// Raw temperature count.
    pub value: i16,
}

impl TemperatureRaw {
    pub(crate) const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self {
            value: le_word(bytes[0], bytes[1]),
        }
    }
}

/// Accelerometer and gyroscope read in one burst.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionRaw {
    /// Raw accelerometer reading.
    pub accel: AccelRaw,
    /// Raw gyroscope reading.
    pub gyro: GyroRaw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twos_complement_over_full_domain() {
        for v in 0..=u16::MAX {
            let expected = if v >= 0x8000 {
                v as i32 - 0x1_0000
            } else {
                v as i32
            };
            let decoded = twos_complement_16(v);
            assert_eq!(decoded as i32, expected);
            assert_eq!(to_twos_complement_16(decoded), v);
        }
    }

    #[test]
    fn twos_complement_boundaries() {
        assert_eq!(twos_complement_16(0x7FFF), i16::MAX);
        assert_eq!(twos_complement_16(0x8000), i16::MIN);
        assert_eq!(twos_complement_16(0xFFFF), -1);
    }

    #[test]
    fn decode_axes_little_endian() {
        let bytes = [0x00, 0x10, 0xFF, 0xFF, 0x34, 0x12];
        assert_eq!(decode_axes(&bytes), [4096, -1, 0x1234]);
    }

    #[test]
    fn gyro_negative_counts_are_signed() {
        let raw = GyroRaw::from_le_bytes(&[0x00, 0x80, 0xFE, 0xFF, 0x00, 0x00]);
        assert_eq!(raw, GyroRaw { x: i16::MIN, y: -2, z: 0 });
    }

    #[test]
    fn temperature_little_endian() {
        assert_eq!(TemperatureRaw::from_le_bytes([0x00, 0x19]).value, 0x1900);
    }
}
