mod common;

mod tests {
    use myrtio_strip_keepalive::color::{OFF, Rgb};
    use myrtio_strip_keepalive::{SmartLedsDriver, Strip};
    use smart_leds::SmartLedsWrite;

    use crate::common::RecordingDriver;

    const TEAL: Rgb = Rgb { r: 10, g: 20, b: 30 };

    fn check_fill<const N: usize>() {
        let mut strip: Strip<RecordingDriver, N> = Strip::new(RecordingDriver::new());
        strip.fill(TEAL);
        strip.show();

        let frames = &strip.driver().frames;
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), N);
        assert!(frames[0].iter().all(|cell| *cell == TEAL));
    }

    #[test]
    fn test_fill_any_length() {
        check_fill::<1>();
        check_fill::<2>();
        check_fill::<3>();
        check_fill::<8>();
        check_fill::<60>();
        check_fill::<144>();
    }

    #[test]
    fn test_fill_three_cells() {
        let mut strip: Strip<RecordingDriver, 3> = Strip::new(RecordingDriver::new());
        strip.fill(Rgb::new(10, 20, 30));
        strip.show();
        assert_eq!(
            strip.driver().last_frame(),
            Some(&[Rgb::new(10, 20, 30), Rgb::new(10, 20, 30), Rgb::new(10, 20, 30)][..])
        );
    }

    #[test]
    fn test_writes_are_buffered_until_show() {
        let mut strip: Strip<RecordingDriver, 4> = Strip::new(RecordingDriver::new());
        strip.set_cell(0, TEAL);
        strip.fill(TEAL);
        assert!(strip.driver().frames.is_empty());

        strip.show();
        strip.set_cell(2, OFF);
        assert_eq!(strip.driver().frames.len(), 1);
        assert_eq!(strip.driver().last_frame(), Some(&[TEAL; 4][..]));
        assert_eq!(strip.cells(), &[TEAL, TEAL, OFF, TEAL]);
    }

    #[test]
    fn test_set_cell_out_of_range_is_ignored() {
        let mut strip: Strip<RecordingDriver, 3> = Strip::new(RecordingDriver::new());
        strip.set_cell(3, TEAL);
        strip.set_cell(usize::MAX, TEAL);
        assert_eq!(strip.cells(), &[OFF; 3]);
        assert_eq!(strip.len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut strip: Strip<RecordingDriver, 5> = Strip::new(RecordingDriver::new());
        strip.fill(TEAL);
        strip.clear();
        strip.show();
        assert_eq!(strip.driver().last_frame(), Some(&[OFF; 5][..]));
    }

    struct Ws2812Mock {
        written: Vec<Rgb>,
    }

    impl SmartLedsWrite for Ws2812Mock {
        type Error = ();
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.written = iterator.into_iter().map(Into::into).collect();
            Err(())
        }
    }

    #[test]
    fn test_smart_leds_driver() {
        let driver = SmartLedsDriver::new(Ws2812Mock {
            written: Vec::new(),
        });
        let mut strip: Strip<_, 2> = Strip::new(driver);
        strip.set_cell(1, TEAL);
        strip.show();

        let writer = strip.driver().inner();
        assert_eq!(writer.written, vec![OFF, TEAL]);
    }
}
