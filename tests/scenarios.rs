//! The literal end-to-end scenarios from spec.md §8 (S1-S6).

mod common;

use ans_codec::coder::Coder;
use ans_codec::driver::StreamingDriver;
use ans_codec::rans::RansCoder;
use ans_codec::tans::{TansCoder, TansTable};
use ans_codec::uabs::UabsCoder;

/// S1: rANS, F = {0:3, 1:3, 2:2}, exhaustive inverse law over x in [8, 64).
#[test]
fn s1_rans_exhaustive_inverse() {
    common::init_logging();
    let model = common::model(&[(0, 3), (1, 3), (2, 2)]);
    let coder = RansCoder::new(&model);

    assert_eq!(coder.encode_step(0, 8).unwrap(), 18);
    assert_eq!(coder.decode_step(18).unwrap(), (0, 8));

    for x in 8..64 {
        for s in [0u32, 1, 2] {
            let encoded = coder.encode_step(s, x).unwrap();
            assert_eq!(coder.decode_step(encoded).unwrap(), (s, x));
        }
    }
}

/// S2: rANS, same model, (b,l) = (2,1), literal input sequence.
#[test]
fn s2_rans_streaming_round_trip() {
    let model = common::model(&[(0, 3), (1, 3), (2, 2)]);
    let coder = RansCoder::new(&model);
    let driver = StreamingDriver::new(2, 1).unwrap();

    let input = vec![0u32, 1, 0, 2, 2, 0, 2, 1, 2];
    let (digits, state) = driver.encode(&coder, &input).unwrap();
    let decoded = driver
        .decode_in_order(&coder, digits, state, input.len())
        .unwrap();
    assert_eq!(decoded, input);
}

/// S3: rANS, F = {0:400, 1:800, 2:200}, (b,l) = (8,9), random input of
/// length M = 1400. Round trip exact; emitted size within 5% of Shannon.
#[test]
fn s3_rans_random_input_near_shannon_bound() {
    let model = common::model(&[(0, 400), (1, 800), (2, 200)]);
    let coder = RansCoder::new(&model);
    let driver = StreamingDriver::new(8, 9).unwrap();

    let input = common::exact_multiplicity_sequence(&model, 1234);
    let (digits, state) = driver.encode(&coder, &input).unwrap();
    let decoded = driver
        .decode_in_order(&coder, digits.clone(), state, input.len())
        .unwrap();
    assert_eq!(decoded, input);

    const B: u64 = 8;
    let emitted_bits = digits.len() as f64 * (B as f64).log2() + (state as f64).log2().ceil();
    let bound = common::shannon_bound_bits(&model);
    assert!(
        emitted_bits <= bound * 1.05,
        "emitted {emitted_bits} bits, Shannon bound {bound} bits"
    );
}

/// S4: tANS, F = {0:3, 1:3, 2:2}, (b,l) = (2,1). Table has 8 entries per
/// side; enc/dec are mutual inverses; symbol counts match frequencies.
#[test]
fn s4_tans_table_shape() {
    let model = common::model(&[(0, 3), (1, 3), (2, 2)]);
    let table = TansTable::build(&model, 2, 1).unwrap();

    assert_eq!(table.dec_len(), 8);
    assert_eq!(table.symbol_count(0), 3);
    assert_eq!(table.symbol_count(1), 3);
    assert_eq!(table.symbol_count(2), 2);

    let coder = TansCoder::new(&table);
    for symbol in model.alphabet() {
        let freq = model.freq(symbol).unwrap();
        for x in freq..(2 * freq) {
            let y = coder.encode_step(symbol, x).unwrap();
            assert_eq!(coder.decode_step(y).unwrap(), (symbol, x));
        }
    }
}

/// S5: tANS, F = {0:10, 1:5, 2:2}, (b,l) = (2,17). |dec| = (b-1)*l*M = 289.
#[test]
fn s5_tans_table_size() {
    let model = common::model(&[(0, 10), (1, 5), (2, 2)]);
    let table = TansTable::build(&model, 2, 17).unwrap();
    assert_eq!(table.dec_len(), 1 * 17 * 17);
}

/// S6: uABS, rational p = 3/10, literal input, (b,l) = (2,9).
#[test]
fn s6_uabs_streaming_round_trip() {
    let coder = UabsCoder::new(3, 10).unwrap();
    let driver = StreamingDriver::new(2, 9).unwrap();

    let input = vec![1u32, 0, 0, 1, 0, 1];
    let (digits, state) = driver.encode(&coder, &input).unwrap();
    let decoded = driver
        .decode_in_order(&coder, digits, state, input.len())
        .unwrap();
    assert_eq!(decoded, input);
}
