// Placeholder key material, not read from any board. Recipes that use it
// are skipped at conversion time. See the module documentation in `spi.rs`.

pub(super) static SPI_BITSWAP: [[u8; 16]; 16] = [
    [15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
    [6, 4, 8, 11, 13, 15, 14, 2, 5, 0, 7, 12, 9, 1, 10, 3],
    [12, 4, 8, 15, 10, 14, 11, 9, 2, 6, 7, 3, 1, 13, 5, 0],
    [4, 12, 8, 6, 5, 11, 1, 14, 7, 3, 0, 10, 15, 13, 9, 2],
    [5, 10, 11, 8, 1, 7, 3, 15, 2, 0, 12, 6, 4, 14, 9, 13],
    [15, 12, 3, 9, 8, 1, 7, 2, 4, 6, 14, 13, 5, 11, 0, 10],
    [3, 5, 9, 1, 8, 14, 13, 0, 7, 6, 11, 15, 2, 10, 4, 12],
    [15, 0, 3, 10, 8, 14, 12, 6, 11, 1, 13, 9, 4, 7, 5, 2],
    [4, 14, 5, 8, 2, 11, 15, 7, 9, 10, 12, 0, 6, 3, 1, 13],
    [0, 5, 7, 8, 14, 13, 3, 10, 4, 1, 11, 6, 2, 9, 15, 12],
    [0, 8, 11, 10, 3, 13, 15, 5, 9, 14, 6, 2, 12, 1, 4, 7],
    [7, 0, 3, 15, 6, 12, 1, 8, 4, 2, 5, 14, 9, 10, 11, 13],
    [6, 13, 12, 1, 5, 4, 0, 14, 11, 15, 9, 3, 2, 10, 8, 7],
    [5, 6, 15, 4, 0, 3, 14, 2, 1, 12, 10, 7, 13, 8, 11, 9],
    [4, 8, 15, 7, 5, 11, 1, 9, 0, 2, 12, 14, 10, 6, 13, 3],
    [13, 9, 2, 11, 14, 12, 8, 0, 7, 4, 3, 1, 5, 15, 10, 6],
];

pub(super) static SEI252_KEY_TABLE: [u8; 256] = [
    0xe5, 0xdf, 0x9f, 0x06, 0x43, 0x92, 0x83, 0x3f, 0x65, 0x86, 0x6c, 0x91, 0x16, 0x3b, 0x7d, 0x69,
    0x02, 0x63, 0xa6, 0x48, 0xa9, 0x69, 0x0b, 0x0d, 0x74, 0x1b, 0x6d, 0x22, 0x08, 0xed, 0x70, 0xff,
    0x42, 0xbc, 0xbd, 0xfd, 0xd6, 0x57, 0x6b, 0x45, 0x23, 0xae, 0xff, 0x94, 0x50, 0xda, 0x6d, 0xea,
    0xa3, 0x39, 0x0a, 0xfd, 0x43, 0x3f, 0xd2, 0xf4, 0x40, 0x83, 0x4b, 0x41, 0xcf, 0x20, 0x95, 0xd1,
    0x88, 0x88, 0x8f, 0x3d, 0xc4, 0x59, 0x9c, 0xaf, 0xd7, 0xe2, 0xdc, 0x02, 0x1f, 0x02, 0x62, 0xa3,
    0x49, 0x1c, 0xaa, 0xe3, 0xdf, 0x8e, 0xf4, 0x25, 0x4b, 0xc6, 0x2d, 0x56, 0x7a, 0x92, 0x14, 0x80,
    0xc5, 0x9a, 0x68, 0x59, 0x07, 0x0b, 0x95, 0x37, 0xc3, 0xc0, 0xf8, 0xf0, 0x92, 0x4c, 0x3b, 0x9e,
    0xab, 0x90, 0x2c, 0x6e, 0x51, 0x21, 0xba, 0x2e, 0xa0, 0x1b, 0x08, 0xe3, 0x8a, 0x24, 0xa4, 0x09,
    0x25, 0x43, 0x0e, 0x6d, 0xd6, 0x1a, 0xbc, 0xde, 0x7f, 0x6e, 0xb1, 0xe7, 0x07, 0xbe, 0xae, 0x11,
    0xfa, 0xa6, 0xc6, 0xe8, 0xcb, 0xcd, 0x11, 0x11, 0x1f, 0x61, 0x02, 0x1f, 0x16, 0x5b, 0x56, 0x67,
    0x37, 0x25, 0xc4, 0x2c, 0x25, 0xb9, 0x87, 0x3b, 0x9a, 0x8f, 0xce, 0x41, 0x49, 0xf6, 0x48, 0x38,
    0x91, 0xb9, 0xed, 0xcb, 0x6b, 0x4d, 0x70, 0x86, 0xd5, 0xd2, 0xfa, 0x4a, 0x5a, 0x1f, 0xf6, 0xf6,
    0xe1, 0x60, 0x07, 0xe1, 0xef, 0xc3, 0xc3, 0x3a, 0x39, 0x6c, 0xab, 0xc8, 0x76, 0x94, 0xcb, 0x10,
    0x5f, 0xa4, 0xa6, 0xc0, 0xbf, 0x0f, 0xb1, 0xb9, 0x64, 0x69, 0x74, 0x39, 0x12, 0xeb, 0xc8, 0xb4,
    0x11, 0x61, 0xd1, 0xe9, 0x4b, 0xed, 0xf3, 0xde, 0x91, 0x55, 0x0d, 0xa7, 0x64, 0x04, 0x0b, 0x15,
    0x80, 0x2d, 0x86, 0x80, 0xa0, 0x98, 0x36, 0xde, 0x88, 0x8d, 0xc8, 0x2c, 0x58, 0xbb, 0xa5, 0x43,
];

pub(super) static RISE10_KEY_TABLE: [u8; 256] = [
    0x06, 0x7f, 0xda, 0xc9, 0x40, 0xda, 0x74, 0x52, 0xd3, 0x57, 0x81, 0xa0, 0x85, 0x3e, 0x51, 0xc2,
    0x71, 0x96, 0x8e, 0xcc, 0x69, 0x33, 0x2d, 0x4d, 0x6a, 0x74, 0xd4, 0x3f, 0xb3, 0x03, 0x16, 0x10,
    0x85, 0x92, 0x55, 0xc1, 0x89, 0xbb, 0x4e, 0x9f, 0xc4, 0xb0, 0xba, 0xf2, 0xd7, 0x20, 0x7b, 0xa2,
    0x0f, 0xc5, 0xea, 0x79, 0x32, 0xa3, 0x85, 0x49, 0x9a, 0xcd, 0x3c, 0x9d, 0xd6, 0x76, 0xb1, 0x6a,
    0x18, 0x53, 0x82, 0x6d, 0xad, 0xec, 0x60, 0x84, 0xd4, 0x47, 0x74, 0x7e, 0x54, 0x43, 0x72, 0x34,
    0xab, 0xb2, 0xe2, 0xfc, 0x80, 0xc7, 0x33, 0xdc, 0x77, 0xa8, 0xca, 0x67, 0x6c, 0x81, 0xab, 0xed,
    0x47, 0x22, 0x85, 0x49, 0xbf, 0x37, 0x96, 0xeb, 0x99, 0xbd, 0x5a, 0x74, 0x4f, 0xb9, 0xb0, 0x33,
    0x5c, 0xa3, 0xae, 0xc3, 0x4e, 0x5f, 0x4a, 0x68, 0x5b, 0xd1, 0x02, 0x7e, 0xf7, 0x4d, 0xaa, 0xdf,
    0x74, 0xa4, 0x02, 0x28, 0x34, 0x43, 0xfb, 0xc1, 0xce, 0xcd, 0xa5, 0xe7, 0xa3, 0x61, 0x9a, 0xee,
    0x93, 0xf7, 0x33, 0xf0, 0x75, 0x55, 0xa7, 0xeb, 0x0e, 0x29, 0x72, 0x74, 0xaa, 0x5a, 0xf6, 0xb3,
    0x45, 0x1a, 0x4e, 0x38, 0xa9, 0x9a, 0x91, 0x2d, 0xce, 0x24, 0x50, 0xaa, 0x60, 0x3c, 0x00, 0xd8,
    0x30, 0xff, 0xf6, 0x38, 0x6d, 0xc4, 0x5c, 0xf3, 0x35, 0x6e, 0x18, 0x64, 0x21, 0xeb, 0xf1, 0x82,
    0xd2, 0xab, 0x55, 0x9f, 0xa2, 0x17, 0x02, 0xca, 0xfe, 0x6d, 0xe0, 0x1c, 0x77, 0x08, 0xce, 0x12,
    0x03, 0xdf, 0x1d, 0x3b, 0x40, 0xac, 0x3f, 0x87, 0x71, 0x4a, 0x70, 0x7e, 0xdc, 0xc5, 0x39, 0x2f,
    0xb4, 0xd7, 0x36, 0x17, 0x16, 0x89, 0x6d, 0x46, 0xd5, 0xf8, 0x04, 0x43, 0x54, 0xb9, 0x41, 0xd4,
    0xe5, 0x04, 0x7e, 0x62, 0xa8, 0xf8, 0xd3, 0x98, 0x3a, 0xdc, 0x0e, 0x4b, 0x7e, 0xda, 0x34, 0xb4,
];

pub(super) static RISE11_KEY_TABLE: [u8; 256] = [
    0xde, 0xb2, 0xdd, 0x4f, 0x00, 0x9e, 0x81, 0xe2, 0x6a, 0x4c, 0x69, 0x37, 0x0d, 0x44, 0xe4, 0x83,
    0xed, 0x5b, 0xe9, 0xf8, 0x39, 0xe5, 0xb6, 0x8c, 0xc6, 0x4a, 0x34, 0x7c, 0xd2, 0x2c, 0x6f, 0xa1,
    0x89, 0x52, 0x39, 0x39, 0xfa, 0x91, 0x6a, 0xa2, 0x34, 0x73, 0xf8, 0xf0, 0x91, 0xe2, 0xfc, 0x5a,
    0xd9, 0xa6, 0x57, 0xd1, 0xed, 0x95, 0x9c, 0xce, 0x7d, 0x7c, 0xf3, 0x2e, 0x21, 0x71, 0xb2, 0x4d,
    0x49, 0xf1, 0x36, 0xb9, 0xd9, 0x37, 0x17, 0x0b, 0xa2, 0xcf, 0xa7, 0xdc, 0x40, 0xee, 0xdd, 0x5b,
    0x57, 0x2b, 0xd2, 0x04, 0x4d, 0x8e, 0x94, 0x2d, 0x45, 0x31, 0xa6, 0x68, 0x18, 0x05, 0xc6, 0x83,
    0x24, 0x25, 0x1a, 0xb2, 0xc6, 0xe0, 0x36, 0x6c, 0x3f, 0xcd, 0x51, 0x9e, 0x20, 0x53, 0x28, 0x3d,
    0xd0, 0x18, 0x43, 0x29, 0x7a, 0xe5, 0x58, 0x2a, 0x0a, 0x1e, 0xf7, 0x0a, 0x57, 0x23, 0xca, 0xa5,
    0xdf, 0x2e, 0x89, 0x07, 0xfd, 0xc5, 0x29, 0x80, 0x00, 0x42, 0x5d, 0x48, 0xa0, 0x2b, 0xce, 0x1e,
    0x78, 0x52, 0x2e, 0x12, 0x51, 0xae, 0x1a, 0x62, 0xf2, 0xfa, 0xc8, 0x3f, 0x24, 0xc6, 0x73, 0x2d,
    0x59, 0x2e, 0x9a, 0x63, 0xcb, 0xe9, 0x76, 0xd5, 0xf0, 0xfd, 0xa0, 0xa6, 0x57, 0xe3, 0xa3, 0x33,
    0xa8, 0x3c, 0x8d, 0x6d, 0x81, 0x5f, 0x8d, 0xb6, 0xd9, 0xef, 0x6d, 0x52, 0xcd, 0x93, 0xb6, 0x03,
    0x3c, 0x48, 0xb1, 0x21, 0xb0, 0x96, 0x2a, 0xea, 0x9f, 0x52, 0x5e, 0x12, 0xb8, 0xfb, 0x43, 0xf3,
    0x9d, 0x81, 0x16, 0xd2, 0xe4, 0xf7, 0x46, 0x99, 0xcb, 0x39, 0xff, 0x0f, 0x33, 0xd4, 0x99, 0xf3,
    0xc7, 0x05, 0x43, 0xc0, 0x41, 0x30, 0x5b, 0xf4, 0x6d, 0x94, 0x1c, 0xb2, 0x32, 0xfd, 0xbf, 0xbd,
    0x7f, 0xc5, 0x14, 0x76, 0xee, 0xca, 0x08, 0x88, 0xa8, 0xee, 0x88, 0xdb, 0xc3, 0xc5, 0x91, 0x5d,
];
