use stuckroutines::parser::{parse_dump, UnitRecord};
use stuckroutines::utils::ParseError;

const DUMP: &str = "goroutine 1 [running]:
main.main()
\t/app/main.go:10 +0x1d

goroutine 17 [chan receive, 5 minutes]:
net/http.(*Server).Serve(0xc000123000, {0x7f1c, 0xc0001a2b30})
\t/usr/local/go/src/net/http/server.go:3056 +0x3b4
created by main.main in goroutine 1
\t/app/main.go:9 +0x25

";

#[test]
fn test_parse_dump_records() {
    let records = parse_dump(DUMP.as_bytes()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0],
        UnitRecord::new("1", "[running]:").with_trace("main.main()\n\t/app/main.go:10 +0x1d\n")
    );
    assert_eq!(records[1].id, "17");
    assert_eq!(records[1].status, "[chan receive, 5 minutes]:");
    assert_eq!(records[1].raw_trace.lines().count(), 4);
    assert!(records[1].raw_trace.ends_with("+0x25\n"));
}

#[test]
fn test_header_is_not_part_of_trace() {
    let records = parse_dump(DUMP.as_bytes()).unwrap();
    assert!(records.iter().all(|r| !r.raw_trace.contains("goroutine 1 [")));
}

#[test]
fn test_unterminated_record_is_dropped() {
    let dump = "goroutine 1 [running]:\nmain.main()\n\ngoroutine 2 [select]:\nmain.loop()\n";
    let records = parse_dump(dump.as_bytes()).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "1");
}

#[test]
fn test_malformed_header_fails() {
    let dump = "goroutine 1 [running]:\nmain.main()\n\ngoroutine 2\nmain.loop()\n\n";
    let err = parse_dump(dump.as_bytes()).unwrap_err();

    match err {
        ParseError::MalformedHeader { line, header } => {
            assert_eq!(line, 4);
            assert_eq!(header, "goroutine 2");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_preamble_and_extra_blank_lines_are_ignored() {
    let dump = "\npanic: something\n\n\ngoroutine 3 [IO wait]:\nnet.poll()\n\n\n\n";
    let records = parse_dump(dump.as_bytes()).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "3");
    assert_eq!(records[0].raw_trace, "net.poll()\n");
}

#[test]
fn test_crlf_dump() {
    let dump = "goroutine 5 [select]:\r\nmain.loop()\r\n\r\n";
    let records = parse_dump(dump.as_bytes()).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, "[select]:");
    assert_eq!(records[0].raw_trace, "main.loop()\n");
}

#[test]
fn test_empty_dump() {
    assert!(parse_dump("".as_bytes()).unwrap().is_empty());
}

#[test]
fn test_invalid_utf8_is_a_read_error() {
    let bytes: &[u8] = b"goroutine 1 [running]:\n\xff\xfe\n\n";
    let err = parse_dump(bytes).unwrap_err();
    assert!(matches!(err, ParseError::Read(_)));
}
