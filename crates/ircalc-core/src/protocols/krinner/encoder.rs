use super::layout;

/// Builds the remote's raw transmit pulse list for one data byte.
///
/// The output uses the same format the decoder consumes: a zero-length
/// placeholder mark, then per repetition a header pair, eight LSB-first
/// data pairs, an end-marker pair and the inter-frame gap.
pub fn encode_pulse_train(byte: u8, repeats: usize) -> Vec<u32> {
    let mut pulses = vec![0];
    for _ in 0..repeats {
        pulses.push(layout::HEADER_MARK_US);
        pulses.push(layout::HEADER_SPACE_US);
        for position in 0..layout::DATA_BITS {
            pulses.push(layout::BIT_MARK_US);
            if byte & (1 << position) != 0 {
                pulses.push(layout::ONE_SPACE_US);
            } else {
                pulses.push(layout::ZERO_SPACE_US);
            }
        }
        pulses.push(layout::END_MARK_US);
        pulses.push(layout::END_SPACE_US);
        pulses.push(layout::FRAME_GAP_US);
    }
    pulses
}
