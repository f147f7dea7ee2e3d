mod tests {
    use smart_leds::{RGB8, SmartLedsWrite};
    use tilt_glow::{OutputDriver, Rgb, SmartLedsOutput};

    #[derive(Default)]
    struct FakeStrip {
        pixels: Vec<RGB8>,
        flushes: usize,
    }

    impl SmartLedsWrite for FakeStrip {
        type Error = ();
        type Color = RGB8;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.pixels = iterator.into_iter().map(Into::into).collect();
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_smart_leds_output_writes_whole_frame() {
        let mut output = SmartLedsOutput::new(FakeStrip::default());
        let frame = [Rgb::new(1, 2, 3); 30];
        output.write(&frame).unwrap();

        let strip = output.into_inner();
        assert_eq!(strip.flushes, 1);
        assert_eq!(strip.pixels, frame);
    }
}
