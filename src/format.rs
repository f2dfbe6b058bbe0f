/// Renders a group of integers as binary strings of one shared width so
/// they can be compared column by column.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BinaryFormatter {
    digits: usize,
    negative: bool,
}

impl BinaryFormatter {
    pub fn new(values: &[i64]) -> Self {
        let digits = values
            .iter()
            .map(|&v| BinaryFormatter::binary_digits(v))
            .max()
            .unwrap_or_else(|| BinaryFormatter::binary_digits(0));

        BinaryFormatter {
            digits,
            negative: values.iter().any(|&v| v < 0),
        }
    }

    /// Column count of every formatted value, including the sign column.
    pub fn digits(&self) -> usize {
        if self.negative {
            self.digits + 1
        } else {
            self.digits
        }
    }

    pub fn format(&self, num: i64) -> String {
        if !self.negative {
            return pad_binary(num, self.digits);
        }

        if num > 0 {
            format!(" {}", pad_binary(num, self.digits))
        } else {
            pad_binary(num, self.digits + 1)
        }
    }

    /// Formats one value on its own, without a group to align against.
    pub fn single_format(num: i64) -> String {
        let mut digits = BinaryFormatter::binary_digits(num);
        if num < 0 {
            digits += 1;
        }

        pad_binary(num, digits)
    }

    /// Number of binary digits shown for `num`, in multiples of 8.
    ///
    /// This is `ceil(log2(|num|))`, plus one when `|num|` is a power of two,
    /// which comes out to the bit length of `|num|`. Zero counts as two bits.
    pub fn binary_digits(num: i64) -> usize {
        let bits = if num == 0 {
            2
        } else {
            (u64::BITS - num.unsigned_abs().leading_zeros()) as usize
        };

        if bits % 8 != 0 {
            (bits / 8) * 8 + 8
        } else {
            bits
        }
    }
}

/// Zero padded binary of `num`, `width` columns wide including a leading
/// `-` for negative values.
fn pad_binary(num: i64, width: usize) -> String {
    if num < 0 {
        format!(
            "-{:0width$b}",
            num.unsigned_abs(),
            width = width.saturating_sub(1)
        )
    } else {
        format!("{:0width$b}", num, width = width)
    }
}
