//! DIMM fault mask formatting.

/// Render a DIMM fault mask as the ascending list of set slot indices.
///
/// Bit N maps to slot N: `0b1010` becomes `"1, 3"`. An empty mask renders
/// as `"none"`.
pub fn dimm_idxs_to_string(dimm_idxs: u32) -> String {
    if dimm_idxs == 0 {
        return "none".to_string();
    }
    (0..u32::BITS)
        .filter(|bit| dimm_idxs & (1 << bit) != 0)
        .map(|bit| bit.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
