//! Statutory fee table band data (StBVV 2020 amendment)
//!
//! Bands are `(min_value, max_value, full_fee)` in whole euros, half-open
//! `[min, max)`, contiguous from zero. Object values at or beyond the top
//! band's upper bound receive the top band's fee. The statute's "bis X €"
//! column values are the band edges.

/// Table A, Beratungstabelle (Anlage 1 zu § 21 StBVV)
pub(crate) const TABLE_A_BANDS: &[(u64, u64, u64)] = &[
    (0, 300, 29),
    (300, 600, 53),
    (600, 900, 76),
    (900, 1_200, 100),
    (1_200, 1_500, 123),
    (1_500, 2_000, 157),
    (2_000, 2_500, 189),
    (2_500, 3_000, 222),
    (3_000, 3_500, 255),
    (3_500, 4_000, 288),
    (4_000, 4_500, 320),
    (4_500, 5_000, 354),
    (5_000, 6_000, 398),
    (6_000, 7_000, 443),
    (7_000, 8_000, 485),
    (8_000, 9_000, 531),
    (9_000, 10_000, 573),
    (10_000, 13_000, 618),
    (13_000, 16_000, 663),
    (16_000, 19_000, 708),
    (19_000, 22_000, 754),
    (22_000, 25_000, 796),
    (25_000, 30_000, 860),
    (30_000, 35_000, 924),
    (35_000, 40_000, 988),
    (40_000, 45_000, 1_051),
    (45_000, 50_000, 1_115),
    (50_000, 65_000, 1_181),
    (65_000, 80_000, 1_245),
    (80_000, 95_000, 1_312),
    (95_000, 110_000, 1_377),
    (110_000, 125_000, 1_443),
    (125_000, 140_000, 1_508),
    (140_000, 155_000, 1_574),
    (155_000, 170_000, 1_639),
    (170_000, 185_000, 1_705),
    (185_000, 200_000, 1_770),
    (200_000, 230_000, 1_840),
    (230_000, 260_000, 1_911),
    (260_000, 290_000, 1_981),
    (290_000, 320_000, 2_051),
    (320_000, 350_000, 2_122),
    (350_000, 380_000, 2_192),
    (380_000, 410_000, 2_262),
    (410_000, 440_000, 2_333),
    (440_000, 470_000, 2_403),
    (470_000, 500_000, 2_473),
    (500_000, 535_000, 2_544),
    (535_000, 570_000, 2_614),
    (570_000, 600_000, 2_684),
];

/// Table B, Abschlusstabelle (Anlage 2 zu § 35 StBVV)
pub(crate) const TABLE_B_BANDS: &[(u64, u64, u64)] = &[
    (0, 3_000, 41),
    (3_000, 3_500, 46),
    (3_500, 4_000, 50),
    (4_000, 4_500, 55),
    (4_500, 5_000, 59),
    (5_000, 6_000, 68),
    (6_000, 7_000, 77),
    (7_000, 8_000, 86),
    (8_000, 9_000, 95),
    (9_000, 10_000, 104),
    (10_000, 12_500, 115),
    (12_500, 15_000, 127),
    (15_000, 17_500, 139),
    (17_500, 20_000, 152),
    (20_000, 22_500, 164),
    (22_500, 25_000, 176),
    (25_000, 37_500, 218),
    (37_500, 50_000, 261),
    (50_000, 62_500, 303),
    (62_500, 75_000, 346),
    (75_000, 87_500, 388),
    (87_500, 100_000, 430),
    (100_000, 125_000, 485),
    (125_000, 150_000, 541),
    (150_000, 175_000, 597),
    (175_000, 200_000, 652),
    (200_000, 225_000, 708),
    (225_000, 250_000, 764),
    (250_000, 300_000, 817),
    (300_000, 350_000, 870),
    (350_000, 400_000, 924),
    (400_000, 450_000, 977),
    (450_000, 500_000, 1_030),
    (500_000, 625_000, 1_094),
    (625_000, 750_000, 1_158),
    (750_000, 875_000, 1_223),
    (875_000, 1_000_000, 1_287),
];

/// Table C, Buchführungstabelle (Anlage 3 zu § 33 StBVV)
pub(crate) const TABLE_C_BANDS: &[(u64, u64, u64)] = &[
    (0, 15_000, 68),
    (15_000, 17_500, 75),
    (17_500, 20_000, 81),
    (20_000, 22_500, 88),
    (22_500, 25_000, 94),
    (25_000, 30_000, 100),
    (30_000, 35_000, 106),
    (35_000, 40_000, 113),
    (40_000, 45_000, 119),
    (45_000, 50_000, 125),
    (50_000, 62_500, 132),
    (62_500, 75_000, 138),
    (75_000, 87_500, 144),
    (87_500, 100_000, 150),
    (100_000, 125_000, 157),
    (125_000, 150_000, 163),
    (150_000, 200_000, 169),
    (200_000, 250_000, 176),
    (250_000, 300_000, 182),
    (300_000, 350_000, 188),
    (350_000, 400_000, 194),
    (400_000, 450_000, 201),
    (450_000, 500_000, 207),
];

/// Table D, Landwirtschaftliche Tabelle (Anlage 4 zu § 39 StBVV)
pub(crate) const TABLE_D_BANDS: &[(u64, u64, u64)] = &[
    (0, 5_000, 129),
    (5_000, 10_000, 190),
    (10_000, 15_000, 253),
    (15_000, 20_000, 316),
    (20_000, 25_000, 379),
    (25_000, 30_000, 441),
    (30_000, 40_000, 504),
    (40_000, 50_000, 567),
    (50_000, 65_000, 630),
    (65_000, 80_000, 693),
    (80_000, 100_000, 755),
    (100_000, 125_000, 818),
    (125_000, 150_000, 881),
    (150_000, 200_000, 944),
    (200_000, 250_000, 1_006),
    (250_000, 300_000, 1_069),
];
