use clap::Parser;
use lsbstego_cli::{KeyArgs, KeySource};

#[derive(Parser)]
struct KeyOnly {
    #[command(flatten)]
    key: KeyArgs,
}

#[test]
fn key_args_require_exactly_one_source() {
    assert!(KeyOnly::try_parse_from(["lsbstego"]).is_err());
    assert!(KeyOnly::try_parse_from(["lsbstego", "--raw", "--passphrase", "x"]).is_err());
    assert!(KeyOnly::try_parse_from(["lsbstego", "--key-file", "k", "--passphrase", "x"]).is_err());
}

#[test]
fn key_args_map_to_key_source() {
    let parsed = KeyOnly::try_parse_from(["lsbstego", "--passphrase", "x"]).unwrap();
    assert_eq!(parsed.key.source(), KeySource::Passphrase("x".into()));

    let parsed = KeyOnly::try_parse_from(["lsbstego", "--key-file", "k.hex"]).unwrap();
    assert_eq!(parsed.key.source(), KeySource::File("k.hex".into()));

    let parsed = KeyOnly::try_parse_from(["lsbstego", "--raw"]).unwrap();
    assert_eq!(parsed.key.source(), KeySource::Raw);
}
