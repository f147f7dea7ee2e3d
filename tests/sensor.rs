mod common;

mod tests {
    use tilt_glow::{Duration, Instant, LightLevel, LightReader, TiltReading, TiltSampler};

    use crate::common::{FakeLight, FakeTilt, RAW_LEVEL_50, RAW_LEVEL_80, SensorFault};

    const PERIOD: Duration = Duration::from_millis(100);

    #[test]
    fn test_light_level_from_raw() {
        assert_eq!(LightLevel::from_raw(0, 4095).percent(), 0);
        assert_eq!(LightLevel::from_raw(RAW_LEVEL_50, 4095).percent(), 50);
        assert_eq!(LightLevel::from_raw(RAW_LEVEL_80, 4095).percent(), 80);
        assert_eq!(LightLevel::from_raw(4095, 4095).percent(), 100);
    }

    #[test]
    fn test_light_level_clamps_out_of_range_raw() {
        assert_eq!(LightLevel::from_raw(5000, 4095).percent(), 100);
        assert_eq!(LightLevel::from_raw(u16::MAX, 4095), LightLevel::MAX);
        assert_eq!(LightLevel::new(250).percent(), 100);
    }

    #[test]
    fn test_light_reader_reads_every_call() {
        let mut reader = LightReader::new(FakeLight::new(RAW_LEVEL_50), 4095);
        for _ in 0..5 {
            assert_eq!(reader.read(), Ok(LightLevel::new(50)));
        }
        assert_eq!(reader.sensor_mut().reads, 5);
    }

    #[test]
    fn test_light_reader_propagates_failure() {
        let mut sensor = FakeLight::new(RAW_LEVEL_50);
        sensor.fail_after = Some(0);
        let mut reader = LightReader::new(sensor, 4095);
        assert_eq!(reader.read(), Err(SensorFault));
    }

    #[test]
    fn test_tilt_sampler_scales_axes() {
        let mut sampler = TiltSampler::new(FakeTilt::new(0.5, -0.25), 90.0, PERIOD);
        let reading = sampler.sample(Instant::from_millis(101)).unwrap();
        assert_eq!(reading, Some(TiltReading::new(45.0, -22.5)));
    }

    #[test]
    fn test_tilt_sampler_first_sample_after_period() {
        let mut sampler = TiltSampler::new(FakeTilt::new(0.1, 0.1), 90.0, PERIOD);
        assert_eq!(sampler.sample(Instant::from_millis(0)), Ok(None));
        assert_eq!(sampler.sample(Instant::from_millis(100)), Ok(None));
        assert!(sampler.sample(Instant::from_millis(101)).unwrap().is_some());
        assert_eq!(sampler.last_sample(), Instant::from_millis(101));
    }

    #[test]
    fn test_tilt_sampler_rate_limits_reads() {
        let mut sampler = TiltSampler::new(FakeTilt::new(0.1, 0.1), 90.0, PERIOD);
        assert!(sampler.sample(Instant::from_millis(150)).unwrap().is_some());
        assert_eq!(sampler.sample(Instant::from_millis(200)), Ok(None));
        assert_eq!(sampler.sample(Instant::from_millis(250)), Ok(None));
        assert_eq!(sampler.sensor_mut().reads, 1);

        assert!(sampler.sample(Instant::from_millis(251)).unwrap().is_some());
        assert_eq!(sampler.sensor_mut().reads, 2);
    }

    #[test]
    fn test_tilt_sampler_propagates_failure() {
        let mut sensor = FakeTilt::new(0.0, 0.0);
        sensor.fail = true;
        let mut sampler = TiltSampler::new(sensor, 90.0, PERIOD);
        assert_eq!(sampler.sample(Instant::from_millis(0)), Ok(None));
        assert_eq!(sampler.sample(Instant::from_millis(500)), Err(SensorFault));
    }

    #[test]
    fn test_tilt_reading_telemetry() {
        assert_eq!(TiltReading::new(0.0, 0.0).telemetry_x(), 150);
        assert_eq!(TiltReading::new(90.0, 0.0).telemetry_x(), 300);
        assert_eq!(TiltReading::new(-90.0, 0.0).telemetry_x(), 0);
        assert_eq!(TiltReading::new(45.0, 12.0).telemetry_x(), 225);
    }
}
