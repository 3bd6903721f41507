//! Plain-text summary printed after a successful run.

use std::io::{self, Write};
use std::path::Path;

use checkout_core::Money;

/// Formats the three-line run summary.
///
/// ```text
/// checkout file: ./checkout_data.json
/// products file: ./product_data.json
/// total value of checkout: 284
/// ```
pub fn render_summary(checkout_path: &Path, products_path: &Path, total: Money) -> String {
    format!(
        "checkout file: {}\nproducts file: {}\ntotal value of checkout: {}\n",
        checkout_path.display(),
        products_path.display(),
        total
    )
}

/// Writes the summary to `out`.
pub fn write_summary<W: Write>(
    out: &mut W,
    checkout_path: &Path,
    products_path: &Path,
    total: Money,
) -> io::Result<()> {
    out.write_all(render_summary(checkout_path, products_path, total).as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_summary() {
        let text = render_summary(
            Path::new("c.json"),
            Path::new("p.json"),
            Money::from_amount(-110),
        );
        assert_eq!(
            text,
            "checkout file: c.json\nproducts file: p.json\ntotal value of checkout: -110\n"
        );
    }

    #[test]
    fn test_write_summary_to_buffer() {
        let mut out = Vec::new();
        write_summary(&mut out, Path::new("a"), Path::new("b"), Money::zero()).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("total value of checkout: 0\n"));
    }
}
