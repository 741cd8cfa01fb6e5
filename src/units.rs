pub mod speed {
    const MPH_TO_MS: f64 = 0.447;

    pub fn mph2ms(mph: f64) -> f64 {
        mph * MPH_TO_MS
    }

    #[test]
    fn test_mph2ms() {
        assert_eq!(mph2ms(0.0), 0.0);
        assert!((mph2ms(10.0) - 4.47).abs() < 1e-9);
        assert!((mph2ms(22.4) - 22.4 * 0.447).abs() < 1e-12);
        // not validated
        assert!(mph2ms(-1.0) < 0.0);
    }
}

pub mod direction {
    pub const COMPASS: [&str; 16] = [
        "北", "北北東", "北東", "東北東", "東", "東南東", "南東", "南南東", "南", "南南西", "南西",
        "西南西", "西", "西北西", "北西", "北北西",
    ];

    /// Buckets a bearing into one of the 16 compass sectors, 22.5° wide and centred on
    /// each label. Any finite bearing is accepted, including negative ones.
    pub fn degree_to_compass(deg: f64) -> &'static str {
        let val = (deg / 22.5 + 0.5).floor() as i64;
        COMPASS[val.rem_euclid(16) as usize]
    }

    #[test]
    fn test_degree_to_compass() {
        assert_eq!(degree_to_compass(0.0), "北");
        assert_eq!(degree_to_compass(90.0), "東");
        assert_eq!(degree_to_compass(180.0), "南");
        assert_eq!(degree_to_compass(270.0), "西");
        assert_eq!(degree_to_compass(360.0), "北");
        assert_eq!(degree_to_compass(11.24), "北");
        assert_eq!(degree_to_compass(11.25), "北北東");
        assert_eq!(degree_to_compass(348.75), "北");
        assert_eq!(degree_to_compass(-90.0), "西");
    }

    #[test]
    fn test_degree_to_compass_wraps() {
        let mut deg = -720.0;
        while deg < 720.0 {
            let label = degree_to_compass(deg);
            assert!(COMPASS.contains(&label));
            assert_eq!(label, degree_to_compass(deg + 360.0), "bearing {deg}");
            deg += 7.3;
        }
    }
}
