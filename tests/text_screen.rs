//! Host-level tests for the status display buffer, its screens and the SSD1306 driver.

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use reflex_grid::Error;
use reflex_grid::oled::{DEFAULT_ADDRESS, Oled};
use reflex_grid::screens::{Instructions, Verdict};
use reflex_grid::text_screen::{BUFFER_LEN, HEIGHT, LINE_COUNT, TextScreen, WIDTH};

/// Records every write; optionally fails after a number of them.
#[derive(Default)]
struct RecordingBus {
    writes: Vec<(u8, Vec<u8>)>,
    fail_after: Option<usize>,
}

impl ErrorType for RecordingBus {
    type Error = ErrorKind;
}

impl I2c for RecordingBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for operation in operations {
            if let Operation::Write(bytes) = operation {
                if self.fail_after.is_some_and(|limit| self.writes.len() >= limit) {
                    return Err(ErrorKind::Other);
                }
                self.writes.push((address, bytes.to_vec()));
            }
        }
        Ok(())
    }
}

fn lit_in_rows(screen: &TextScreen, rows: core::ops::Range<usize>) -> usize {
    rows.flat_map(|y| (0..WIDTH).map(move |x| (x, y)))
        .filter(|(x, y)| screen.is_on(*x, *y))
        .count()
}

#[test]
fn new_screen_is_dark() {
    let screen = TextScreen::new();
    assert_eq!(screen.lit_count(), 0);
    assert_eq!(screen.as_bytes().len(), BUFFER_LEN);
    assert_eq!(LINE_COUNT, 8);
}

#[test]
fn write_line_draws_only_inside_its_band() {
    let mut screen = TextScreen::new();
    screen.write_line(2, "Score").unwrap();
    assert!(lit_in_rows(&screen, 16..24) > 0);
    assert_eq!(lit_in_rows(&screen, 0..16), 0);
    assert_eq!(lit_in_rows(&screen, 24..HEIGHT), 0);
    // The left margin stays dark.
    assert!((0..HEIGHT).all(|y| (0..5).all(|x| !screen.is_on(x, y))));
}

#[test]
fn line_past_the_bottom_is_an_error() {
    let mut screen = TextScreen::new();
    assert!(matches!(
        screen.write_line(LINE_COUNT, "x"),
        Err(Error::LineOutOfRange(8))
    ));
    assert!(screen.write_line(LINE_COUNT - 1, "last").is_ok());
}

#[test]
fn long_lines_are_clipped() {
    let mut screen = TextScreen::new();
    screen
        .write_line(0, "This line is much longer than the display")
        .unwrap();
    assert!(!screen.is_on(WIDTH, 0));
    assert!(screen.lit_count() > 0);
}

#[test]
fn clear_turns_everything_off() {
    let mut screen = TextScreen::new();
    screen.write_line(0, "#####").unwrap();
    screen.clear();
    assert_eq!(screen, TextScreen::new());
}

#[test]
fn every_instruction_page_draws() {
    for page in Instructions::ALL {
        let mut screen = TextScreen::new();
        page.draw(&mut screen, 20).unwrap();
        assert!(screen.lit_count() > 0, "{page:?} is blank");
    }
}

#[test]
fn huge_passing_score_still_fits() {
    let mut screen = TextScreen::new();
    Instructions::Title.draw(&mut screen, i32::MIN).unwrap();
}

#[test]
fn verdict_uses_passing_score_inclusively() {
    assert_eq!(Verdict::from_score(20, 20), Verdict::Approved);
    assert_eq!(Verdict::from_score(19, 20), Verdict::Failed);
    assert_eq!(Verdict::from_score(-3, 20), Verdict::Failed);
    assert_eq!(Verdict::Approved.label(), "Approved");
    assert_eq!(Verdict::Failed.animation().name(), "failed");
}

#[test]
fn result_page_differs_by_score() {
    let mut low = TextScreen::new();
    let mut high = TextScreen::new();
    Verdict::Failed.draw(&mut low, -3).unwrap();
    Verdict::Failed.draw(&mut high, 7).unwrap();
    assert_ne!(low, high);
    // Same heading on line 0.
    assert_eq!(lit_in_rows(&low, 0..8), lit_in_rows(&high, 0..8));
}

#[test]
fn oled_init_then_flush_sends_whole_frame() {
    let mut oled = Oled::new(RecordingBus::default(), DEFAULT_ADDRESS).unwrap();
    let mut screen = TextScreen::new();
    screen.write_line(0, "Hi").unwrap();
    oled.flush(&screen).unwrap();

    let bus = oled.release();
    assert!(bus.writes.iter().all(|(address, _)| *address == DEFAULT_ADDRESS));

    let (commands, data): (Vec<_>, Vec<_>) = bus
        .writes
        .iter()
        .map(|(_, bytes)| bytes.as_slice())
        .partition(|bytes| bytes[0] == 0x00);
    assert!(commands.iter().all(|bytes| bytes.len() == 2));
    assert_eq!(commands.first().map(|bytes| bytes[1]), Some(0xAE));
    assert!(commands.iter().any(|bytes| bytes[1] == 0xAF));

    let sent: Vec<u8> = data
        .iter()
        .inspect(|bytes| assert_eq!(bytes[0], 0x40))
        .flat_map(|bytes| bytes[1..].iter().copied())
        .collect();
    assert_eq!(sent.as_slice(), screen.as_bytes());
}

#[test]
fn bus_failure_becomes_display_write_error() {
    let bus = RecordingBus {
        fail_after: Some(3),
        ..RecordingBus::default()
    };
    assert!(matches!(
        Oled::new(bus, DEFAULT_ADDRESS),
        Err(Error::DisplayWrite(ErrorKind::Other))
    ));
}
