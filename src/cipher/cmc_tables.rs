// Placeholder key material, not read from any board. Recipes that use it
// are skipped at conversion time. See the module documentation in `cmc.rs`.

use super::cmc::{CmcTables, M1Tables};

static CMC42_TYPE0_T03: [u8; 256] = [
    0x24, 0x9f, 0xde, 0x7e, 0xe4, 0x96, 0x83, 0x30, 0xfd, 0x5e, 0xef, 0x41, 0x23, 0xba, 0x55, 0xd0,
    0xea, 0x0f, 0x39, 0xc4, 0x45, 0xbd, 0x0c, 0x04, 0x69, 0xef, 0x69, 0xa3, 0xf7, 0x9c, 0x67, 0x95,
    0x23, 0x66, 0xa4, 0xb4, 0xcf, 0x27, 0x9e, 0x2c, 0xce, 0x8b, 0x08, 0x3c, 0xb3, 0xf2, 0xd4, 0x1c,
    0xcb, 0x32, 0xda, 0xa1, 0xf4, 0xbe, 0xbb, 0x6f, 0x5e, 0x02, 0xa0, 0x9f, 0x06, 0x90, 0xf2, 0xa4,
    0xea, 0xad, 0x11, 0x59, 0x93, 0xaa, 0x35, 0xaf, 0x1e, 0xbb, 0x3a, 0x08, 0xcb, 0x0c, 0x55, 0x4e,
    0x5d, 0x33, 0xd8, 0x33, 0x32, 0x9a, 0xc5, 0x77, 0x22, 0x1f, 0xfc, 0x2d, 0x59, 0xf6, 0xbf, 0x6e,
    0x32, 0x87, 0xde, 0x6c, 0x89, 0xd4, 0x28, 0xb0, 0x56, 0xcd, 0x56, 0x6c, 0x4a, 0x7d, 0x24, 0x06,
    0x3d, 0xc8, 0x3d, 0x53, 0x89, 0xc1, 0xd5, 0x74, 0x37, 0xa1, 0xae, 0x9e, 0x98, 0x8f, 0x0a, 0x2a,
    0xcd, 0xf8, 0xb9, 0x30, 0x65, 0x67, 0x69, 0xd0, 0x88, 0xb9, 0x7f, 0xcf, 0x6e, 0x26, 0xde, 0x3f,
    0x99, 0x94, 0x73, 0x63, 0x53, 0xa6, 0x55, 0x8c, 0x49, 0xb5, 0x9b, 0x20, 0xc3, 0xe0, 0xa3, 0xc5,
    0xe5, 0xd6, 0x2c, 0x16, 0x70, 0xe5, 0x11, 0x44, 0x5e, 0xcd, 0xa2, 0x8a, 0x83, 0x67, 0xda, 0xc8,
    0x29, 0xf4, 0x29, 0xa3, 0xf4, 0x8a, 0x94, 0x29, 0x18, 0x37, 0x13, 0xa0, 0xfd, 0x66, 0x0a, 0x99,
    0x04, 0xa6, 0x8e, 0x5c, 0xad, 0xc8, 0x4a, 0x6a, 0x9d, 0xad, 0xd2, 0x4f, 0x15, 0x7d, 0x12, 0xbe,
    0x65, 0x62, 0x44, 0x0e, 0x82, 0xbd, 0x6a, 0x7b, 0xb8, 0xfa, 0x03, 0xb1, 0x4d, 0x28, 0xdf, 0x3c,
    0x90, 0x75, 0x9e, 0xe0, 0xe2, 0xa5, 0x66, 0x03, 0x6b, 0x56, 0x68, 0xd4, 0x4e, 0x88, 0xf8, 0x7c,
    0x33, 0xe8, 0x56, 0x1a, 0x08, 0xa3, 0xef, 0x0f, 0x31, 0xc4, 0xcf, 0x3c, 0xa1, 0x06, 0x97, 0x31,
];

static CMC42_TYPE0_T12: [u8; 256] = [
    0x51, 0x01, 0x5c, 0xcd, 0x81, 0x17, 0x9d, 0x9c, 0x3e, 0x45, 0xec, 0x2f, 0xe0, 0xfa, 0xc4, 0xa0,
    0xfc, 0x3b, 0x40, 0x1e, 0xf8, 0x48, 0xef, 0x0e, 0xd2, 0xc0, 0xb5, 0x12, 0xd4, 0x6d, 0xbb, 0x0b,
    0xc9, 0xeb, 0x7d, 0x4a, 0x62, 0x84, 0x58, 0x97, 0x82, 0xa2, 0xd2, 0x47, 0x03, 0xa2, 0xca, 0x8f,
    0xfc, 0xf1, 0x50, 0x83, 0xe9, 0x6e, 0xef, 0x28, 0x5a, 0xb4, 0x2f, 0x5b, 0xa3, 0x2f, 0x55, 0xc4,
    0x8f, 0x04, 0xc7, 0x28, 0x92, 0x41, 0xf0, 0x9c, 0xa8, 0xc4, 0x0f, 0x2a, 0x5b, 0xd7, 0xf6, 0x04,
    0xdf, 0xc1, 0xaa, 0xbe, 0x17, 0x83, 0x7e, 0x14, 0x30, 0x8d, 0xce, 0xc1, 0xda, 0x79, 0xc8, 0xcb,
    0x7b, 0x3a, 0x2e, 0x1d, 0xc9, 0x29, 0x72, 0x94, 0x18, 0xc6, 0x87, 0x62, 0x89, 0x8a, 0x6d, 0x7a,
    0x57, 0xfd, 0xbc, 0xc4, 0x20, 0xb9, 0xff, 0x28, 0x10, 0x1f, 0xa2, 0x90, 0x53, 0xfb, 0x7c, 0x42,
    0x1a, 0x44, 0xc6, 0x64, 0xa3, 0x23, 0xa7, 0x05, 0x95, 0xec, 0x71, 0xb6, 0xe0, 0xc2, 0xd3, 0x95,
    0x47, 0x8e, 0x80, 0x18, 0x9e, 0xe8, 0x1f, 0x55, 0xc2, 0x35, 0x3a, 0xd0, 0xd1, 0x63, 0xbc, 0xa2,
    0xc1, 0x5e, 0x96, 0x50, 0x00, 0xbd, 0x2e, 0x4c, 0xb5, 0xef, 0x86, 0xe3, 0xa6, 0x91, 0x9a, 0x7a,
    0x9f, 0xb4, 0xa6, 0x5f, 0x08, 0x3b, 0x81, 0xdd, 0x23, 0x43, 0xba, 0xf1, 0xbe, 0xef, 0x9d, 0xb8,
    0xbf, 0x93, 0x5d, 0x2f, 0x3b, 0xd7, 0xd8, 0x1a, 0xa2, 0x94, 0x70, 0x12, 0x36, 0x10, 0x96, 0x2d,
    0x72, 0xf3, 0x73, 0x50, 0xaa, 0xad, 0xfd, 0x81, 0x91, 0x34, 0x8d, 0x6f, 0xff, 0x12, 0x2b, 0x70,
    0x73, 0xd9, 0xa9, 0x4c, 0x3f, 0x30, 0x68, 0xef, 0xbf, 0x57, 0x6a, 0xaa, 0x02, 0xcd, 0x49, 0xff,
    0xa9, 0x36, 0x2e, 0xb1, 0x14, 0xdf, 0xbb, 0x41, 0xf1, 0x3d, 0xe8, 0x82, 0xcf, 0x2d, 0x13, 0x92,
];

static CMC42_TYPE1_T03: [u8; 256] = [
    0x96, 0xf3, 0x56, 0x93, 0xe4, 0xd2, 0xca, 0x91, 0x84, 0x47, 0x71, 0x2a, 0x7c, 0xd8, 0xa3, 0xef,
    0xa9, 0xe6, 0x83, 0x23, 0x27, 0x66, 0xd6, 0x9f, 0xd5, 0x78, 0x96, 0xd8, 0xcf, 0x33, 0x83, 0xb2,
    0xcb, 0x74, 0x7f, 0xa9, 0xdb, 0xae, 0x65, 0x95, 0x19, 0xb6, 0xe5, 0x91, 0xe2, 0xb8, 0xf3, 0x97,
    0xc4, 0x1e, 0xc8, 0xa6, 0xfd, 0x31, 0x15, 0x8f, 0x6a, 0x9c, 0xfd, 0x47, 0x5a, 0xc4, 0x4a, 0x4e,
    0x91, 0xaa, 0x5b, 0x2f, 0x49, 0xf6, 0xff, 0x4e, 0xc5, 0xb9, 0x88, 0x79, 0x3d, 0x2d, 0xc6, 0x20,
    0x2e, 0xca, 0xb6, 0xde, 0xcb, 0x63, 0x66, 0x3d, 0x7b, 0xf7, 0x7a, 0x4a, 0x23, 0xf9, 0x65, 0x28,
    0x47, 0x4c, 0xa7, 0x2f, 0xd0, 0x5b, 0x88, 0xec, 0x58, 0x29, 0x9f, 0x68, 0x44, 0x60, 0xf1, 0xd5,
    0x8f, 0x10, 0x37, 0xef, 0x74, 0xae, 0x3b, 0xfb, 0x07, 0x67, 0xd7, 0xff, 0x26, 0xd3, 0x19, 0xb2,
    0xe3, 0x90, 0x61, 0xab, 0x70, 0xf6, 0xfa, 0x22, 0x79, 0x20, 0x61, 0x97, 0xe0, 0x84, 0x5a, 0xc5,
    0x09, 0xcf, 0x44, 0x28, 0x69, 0x59, 0x25, 0xbb, 0xcd, 0x1e, 0x79, 0xc6, 0x2d, 0x16, 0x35, 0x33,
    0xcb, 0x15, 0xf3, 0xf6, 0x8e, 0xdd, 0xb1, 0x60, 0xb6, 0x77, 0x35, 0xf0, 0x99, 0xf0, 0x0e, 0xa4,
    0x1a, 0x4c, 0x69, 0x79, 0x4d, 0x73, 0x46, 0x2d, 0x06, 0x9b, 0xf3, 0x2e, 0xa0, 0xb3, 0x0f, 0xb0,
    0xed, 0x19, 0x12, 0x52, 0xf6, 0xb8, 0xb6, 0xdd, 0x7f, 0x8f, 0x2b, 0x0f, 0x73, 0xc4, 0xfc, 0x5a,
    0x1f, 0x1f, 0x29, 0x97, 0xc8, 0x54, 0x53, 0x9b, 0x49, 0x4e, 0x37, 0x74, 0xbd, 0x67, 0x5e, 0x77,
    0x94, 0xbd, 0x29, 0x3c, 0xdb, 0x60, 0x22, 0x11, 0x80, 0x71, 0x9a, 0x68, 0xcf, 0xdb, 0xaf, 0x44,
    0x5d, 0x05, 0xb1, 0x37, 0xa4, 0x93, 0x22, 0x90, 0x5c, 0xff, 0xdd, 0xee, 0x26, 0x8b, 0x3e, 0xf7,
];

static CMC42_TYPE1_T12: [u8; 256] = [
    0x27, 0xcc, 0x74, 0x26, 0x18, 0xb9, 0x17, 0x31, 0xe9, 0xb0, 0x52, 0x87, 0x69, 0x13, 0x14, 0xe7,
    0x66, 0x7b, 0x9b, 0xf4, 0xce, 0xf1, 0x61, 0x31, 0x76, 0x86, 0x40, 0x9d, 0xbc, 0x16, 0x56, 0x81,
    0x4b, 0x0e, 0xf5, 0x47, 0x1c, 0x15, 0x26, 0x43, 0x20, 0xfe, 0x73, 0xd2, 0xc1, 0xcc, 0x08, 0xa9,
    0xb3, 0x0e, 0x41, 0x9e, 0x84, 0xf4, 0x03, 0x61, 0xb5, 0x65, 0xbf, 0x0c, 0xa0, 0x72, 0xfd, 0x17,
    0xfa, 0xb4, 0x15, 0xc7, 0x43, 0xcb, 0xe3, 0x90, 0x4a, 0xc7, 0x32, 0x90, 0xe4, 0xe7, 0xc9, 0x14,
    0x85, 0xd2, 0xac, 0xcf, 0x8c, 0x6b, 0x8f, 0x9a, 0x67, 0x97, 0x42, 0x04, 0xf0, 0xce, 0xe7, 0x33,
    0x9d, 0x35, 0x79, 0x43, 0x98, 0x2e, 0x65, 0x27, 0x9d, 0x35, 0xfe, 0x1d, 0x98, 0x7d, 0x4e, 0xfb,
    0x65, 0x9f, 0xb0, 0x8a, 0x03, 0x96, 0x1b, 0x55, 0x68, 0x2c, 0x81, 0x70, 0x2e, 0x3e, 0x53, 0x73,
    0xf7, 0x8d, 0xf6, 0x84, 0x50, 0x5b, 0xb6, 0xcf, 0xd5, 0xc7, 0x4a, 0x93, 0x09, 0x8d, 0x48, 0xc6,
    0x08, 0x64, 0x57, 0xfd, 0xdb, 0x9a, 0xdc, 0x13, 0x28, 0xf7, 0xac, 0xfa, 0x55, 0x50, 0x40, 0xff,
    0xcd, 0x91, 0x5c, 0x51, 0x28, 0xc6, 0x27, 0xab, 0x1c, 0xa8, 0x81, 0x27, 0x1b, 0xfa, 0x3d, 0xd7,
    0xee, 0x97, 0xdd, 0xbc, 0x70, 0x44, 0x03, 0x8e, 0xd3, 0xa9, 0x05, 0xae, 0x54, 0x94, 0x0e, 0x98,
    0x53, 0x5f, 0xc5, 0x8d, 0xa3, 0x55, 0xb3, 0x5c, 0x5d, 0x5f, 0xb8, 0xe4, 0xf5, 0xb1, 0xa0, 0x53,
    0x5d, 0xbf, 0x20, 0x24, 0x2a, 0x1b, 0xa9, 0x2f, 0xee, 0x59, 0xf5, 0x22, 0x7b, 0xb6, 0x43, 0x52,
    0xd0, 0x07, 0x21, 0xc8, 0x7d, 0x70, 0xe5, 0x33, 0xe3, 0x20, 0x13, 0x4a, 0x3c, 0xd5, 0x63, 0x65,
    0xd0, 0xea, 0x77, 0xa7, 0x21, 0x44, 0x57, 0x8e, 0xcd, 0xd1, 0x78, 0x87, 0x36, 0x21, 0x9e, 0xe8,
];

static CMC42_ADDRESS_8_15_XOR1: [u8; 256] = [
    0x2f, 0xb6, 0x9c, 0xb9, 0x4c, 0x28, 0x5c, 0xba, 0x2d, 0xfc, 0x1b, 0x0b, 0x37, 0x6c, 0xb2, 0xd5,
    0xf6, 0x84, 0x37, 0x7d, 0xf5, 0xad, 0x94, 0x90, 0x2f, 0x85, 0x19, 0xe7, 0xa4, 0x69, 0xc5, 0xa3,
    0x98, 0x82, 0x4c, 0xe0, 0xc8, 0xc2, 0xab, 0xea, 0x3f, 0x46, 0xf3, 0x4b, 0xf5, 0x9a, 0xd7, 0x01,
    0x18, 0x5f, 0x8c, 0x22, 0x92, 0x79, 0xe6, 0x36, 0x78, 0x32, 0xcd, 0x01, 0x41, 0x78, 0x2b, 0x0a,
    0xee, 0x80, 0x02, 0x03, 0xda, 0xcb, 0x90, 0x79, 0x1a, 0x56, 0x57, 0xcb, 0x0c, 0x1d, 0xc7, 0xae,
    0x9d, 0x9e, 0xb4, 0x38, 0xb9, 0x69, 0xc5, 0x52, 0x4b, 0xb3, 0x0e, 0xc7, 0xf8, 0x75, 0x1c, 0x36,
    0xf4, 0x0d, 0x44, 0x99, 0x7c, 0x5d, 0xbb, 0xca, 0xc3, 0x55, 0x57, 0x29, 0x7c, 0xf2, 0xbd, 0xeb,
    0xee, 0x75, 0x28, 0xe2, 0x9f, 0x09, 0x05, 0xe5, 0x0b, 0x94, 0x51, 0x05, 0x8b, 0xa6, 0x09, 0xd3,
    0x17, 0xdd, 0x43, 0x15, 0xb6, 0x0a, 0x66, 0xf8, 0x16, 0x00, 0x6d, 0xa3, 0xc7, 0xd6, 0x6c, 0xc1,
    0xd1, 0x8e, 0x48, 0xb9, 0xef, 0x7b, 0x98, 0x90, 0x83, 0x92, 0x6e, 0x72, 0xdb, 0xce, 0xd2, 0x7e,
    0xde, 0xce, 0x31, 0x7a, 0x9f, 0x48, 0xfb, 0xf7, 0x5b, 0x8b, 0x3f, 0x57, 0xc4, 0xf9, 0x96, 0xce,
    0x17, 0x14, 0xaa, 0x95, 0xc0, 0xc1, 0xa6, 0x0f, 0x16, 0x72, 0xf6, 0xec, 0xb6, 0xa7, 0xd9, 0xf3,
    0x79, 0xbf, 0xd0, 0x4a, 0xc7, 0xc2, 0x3b, 0xc2, 0x28, 0xb7, 0xfc, 0x5a, 0x07, 0xd8, 0xde, 0x9d,
    0xd2, 0x0b, 0x56, 0x91, 0x4b, 0x65, 0x06, 0xc2, 0x1b, 0x50, 0xd1, 0x63, 0xd0, 0xe9, 0x03, 0x23,
    0x2b, 0x12, 0x88, 0xd1, 0x76, 0x61, 0x8a, 0xf8, 0x9a, 0xa4, 0x3b, 0x1e, 0x7d, 0x6d, 0x80, 0xf7,
    0x8a, 0x21, 0x22, 0x2d, 0x51, 0x64, 0xd2, 0xfa, 0xb7, 0x75, 0x8b, 0x39, 0x3f, 0x92, 0x40, 0x91,
];

static CMC42_ADDRESS_8_15_XOR2: [u8; 256] = [
    0x5d, 0x58, 0x18, 0x52, 0x88, 0xbd, 0x51, 0x11, 0xbd, 0x40, 0xb5, 0xe3, 0xb7, 0xad, 0xf6, 0xae,
    0xed, 0x5b, 0xa1, 0xb8, 0x21, 0xbb, 0x1a, 0x32, 0x09, 0x66, 0x02, 0xb4, 0x70, 0x18, 0xca, 0x57,
    0x4b, 0x8c, 0x06, 0xec, 0x55, 0x81, 0x7b, 0x5d, 0x44, 0xef, 0x3a, 0xc0, 0xa5, 0x5b, 0x71, 0x83,
    0x42, 0xc2, 0x4a, 0x17, 0x1b, 0xad, 0x7b, 0xda, 0x6a, 0xe8, 0x4b, 0xbe, 0xae, 0xfd, 0x2d, 0xcc,
    0x0e, 0xa3, 0xb6, 0xaf, 0xfd, 0xd5, 0x38, 0xcc, 0x3d, 0x2f, 0xe9, 0x2e, 0x4a, 0xe0, 0x57, 0x8a,
    0x60, 0xf1, 0x0c, 0xde, 0xab, 0xd3, 0x9d, 0x7b, 0xda, 0xf1, 0x48, 0xc1, 0x53, 0xc9, 0x5d, 0x36,
    0x9c, 0x7b, 0x2f, 0xad, 0x27, 0xb5, 0xab, 0xe0, 0xfe, 0xe5, 0x28, 0x3a, 0x77, 0x34, 0xdf, 0x38,
    0x44, 0xec, 0x80, 0x53, 0xa4, 0xfb, 0x48, 0xe0, 0x2b, 0x74, 0x9f, 0xc2, 0xb3, 0xb2, 0x17, 0x3c,
    0x26, 0x3c, 0xaf, 0x63, 0x25, 0x44, 0xe6, 0x4e, 0x2e, 0x3c, 0x3a, 0x88, 0x50, 0x9f, 0xd3, 0xb6,
    0x27, 0x0c, 0x47, 0xc9, 0x07, 0x31, 0xcf, 0xb4, 0x20, 0xd3, 0x19, 0x4f, 0x0f, 0x77, 0xec, 0xc5,
    0xe1, 0x21, 0x47, 0xe9, 0x8f, 0x9c, 0xd8, 0x86, 0xd1, 0x09, 0xfd, 0x27, 0x13, 0x43, 0x14, 0x93,
    0x30, 0x0c, 0xb4, 0x3b, 0x08, 0x68, 0xa3, 0x53, 0x14, 0x21, 0x53, 0x75, 0x17, 0xa7, 0x89, 0x1c,
    0xef, 0xd5, 0xf2, 0x88, 0x90, 0x8e, 0xd3, 0xe0, 0xf5, 0x9c, 0x6d, 0x83, 0x00, 0xf7, 0xfb, 0x76,
    0xe3, 0xdd, 0x83, 0x94, 0x24, 0xd1, 0xa2, 0x1b, 0x0b, 0x80, 0xdf, 0xf0, 0x34, 0xf8, 0x46, 0xa5,
    0xa4, 0x35, 0x71, 0x25, 0xbd, 0x25, 0xc0, 0xf9, 0x68, 0xc0, 0x9a, 0x47, 0x19, 0x9a, 0x26, 0xce,
    0x91, 0xff, 0xb7, 0x7b, 0xa3, 0xac, 0xc7, 0xa8, 0x7b, 0x70, 0x66, 0xfc, 0x5d, 0x72, 0xa8, 0x0e,
];

static CMC42_ADDRESS_16_23_XOR1: [u8; 256] = [
    0x19, 0x0f, 0x0e, 0xce, 0x6a, 0x1a, 0x23, 0xf5, 0xdc, 0x04, 0xd5, 0xc1, 0x1c, 0x11, 0x31, 0xfe,
    0xd7, 0x7f, 0x81, 0x97, 0x49, 0xa7, 0x1d, 0x36, 0xb3, 0x8c, 0xcd, 0x2a, 0x7f, 0x54, 0xf6, 0x23,
    0xf8, 0xce, 0xd8, 0x2d, 0x54, 0x51, 0x77, 0x1c, 0x1f, 0xe0, 0xab, 0x52, 0x2f, 0x5c, 0x4d, 0xbe,
    0xa5, 0xa3, 0xd8, 0x94, 0x0b, 0xed, 0xa4, 0x9d, 0x98, 0x5f, 0xc2, 0xec, 0x10, 0x3d, 0xef, 0xf2,
    0xac, 0x95, 0x35, 0xf9, 0xec, 0x58, 0x57, 0x49, 0x56, 0xa7, 0xa7, 0x26, 0x13, 0x61, 0x6f, 0xaf,
    0xd0, 0x7f, 0x58, 0x43, 0x29, 0x29, 0x98, 0x82, 0xb6, 0x42, 0xc7, 0x48, 0x8b, 0x07, 0xfe, 0x79,
    0x2a, 0xf5, 0xf7, 0x6d, 0x6c, 0x57, 0xc4, 0x64, 0xc3, 0x87, 0xb8, 0x36, 0x9e, 0x9e, 0xb7, 0x4b,
    0xdf, 0x9a, 0x7c, 0x08, 0x8b, 0xe7, 0xf5, 0x96, 0x44, 0x69, 0x7c, 0xa6, 0x0b, 0x9c, 0xd2, 0x3f,
    0x3e, 0xe8, 0x86, 0x1f, 0x23, 0xec, 0xef, 0xa0, 0x37, 0xab, 0x08, 0x40, 0x03, 0x58, 0x37, 0x15,
    0x93, 0xea, 0x56, 0xa3, 0x45, 0xb4, 0x20, 0x14, 0xd5, 0x66, 0xf9, 0x0a, 0x09, 0x7d, 0x96, 0xda,
    0x49, 0x45, 0xe1, 0x6f, 0x57, 0x50, 0xcd, 0x37, 0x9b, 0xc5, 0xab, 0xd6, 0x94, 0xe0, 0x0c, 0xa8,
    0x5d, 0x0a, 0x54, 0x64, 0x66, 0x38, 0x5c, 0x68, 0xa9, 0x16, 0xef, 0x7f, 0x6f, 0x31, 0x5d, 0x44,
    0xc3, 0xc3, 0xf1, 0xb2, 0x4c, 0xc6, 0x55, 0x1a, 0x7c, 0x7c, 0xc1, 0x5e, 0x38, 0x17, 0xcf, 0xb8,
    0xc8, 0x9d, 0xad, 0x61, 0xe6, 0x0d, 0xf9, 0x18, 0x7a, 0xd3, 0xcf, 0x90, 0xdc, 0x60, 0x86, 0xd2,
    0xdb, 0xb2, 0xee, 0x2e, 0x55, 0x5e, 0xe7, 0x73, 0x05, 0xba, 0xe8, 0xf9, 0xb5, 0xec, 0x9a, 0x6b,
    0x4e, 0x90, 0xb8, 0x98, 0x8e, 0x2f, 0x8c, 0x04, 0x62, 0xf0, 0x1f, 0xe3, 0x0a, 0x2e, 0x97, 0x49,
];

static CMC42_ADDRESS_16_23_XOR2: [u8; 256] = [
    0x8a, 0x86, 0xe9, 0x9e, 0xc7, 0xa2, 0xd0, 0xb6, 0x7d, 0xb5, 0xe4, 0x95, 0x56, 0x63, 0xbd, 0x32,
    0x31, 0x60, 0xad, 0xdb, 0x40, 0x45, 0x4b, 0x07, 0x95, 0x6b, 0x29, 0xde, 0x3b, 0xc4, 0xf4, 0x25,
    0xd5, 0x43, 0xb5, 0x8d, 0xcb, 0x6f, 0x86, 0xe6, 0x5a, 0xac, 0x8b, 0xfa, 0x78, 0x62, 0xa9, 0x74,
    0xa8, 0xbd, 0x08, 0x57, 0x0c, 0x59, 0x3a, 0xbe, 0xb3, 0x0a, 0xba, 0x20, 0x5d, 0xb4, 0x24, 0x35,
    0x50, 0x0b, 0x18, 0x7e, 0x2f, 0x8d, 0xbb, 0x2f, 0x20, 0x45, 0x32, 0xc7, 0xd0, 0x79, 0x8a, 0x2d,
    0xb5, 0x6b, 0x8f, 0xc5, 0xe7, 0x0d, 0x3a, 0xf6, 0x08, 0x56, 0xb6, 0xe2, 0x80, 0xc1, 0x34, 0x58,
    0x03, 0xa7, 0x62, 0xae, 0x74, 0x02, 0xa1, 0x6b, 0x13, 0xb3, 0x8c, 0x31, 0x0f, 0x7e, 0x1a, 0x30,
    0x37, 0x5f, 0xdf, 0x1b, 0x99, 0x0a, 0x1a, 0x3c, 0xf4, 0xbe, 0xe5, 0x74, 0x21, 0xad, 0xa8, 0x4c,
    0x6c, 0xce, 0x5b, 0x61, 0xcf, 0xf4, 0x92, 0x27, 0x0a, 0x73, 0x28, 0x99, 0xc5, 0x0c, 0x35, 0xbd,
    0x61, 0xa0, 0xb5, 0x7e, 0xc1, 0x52, 0xe4, 0x73, 0x96, 0x05, 0x8d, 0x0a, 0x5f, 0xf5, 0x5c, 0xbc,
    0x26, 0x61, 0x46, 0x9c, 0x3b, 0xe9, 0x6a, 0xe4, 0x96, 0x12, 0xbc, 0xa7, 0x40, 0x10, 0xb4, 0xad,
    0x19, 0x38, 0xb7, 0x0f, 0xab, 0xfd, 0xfb, 0x28, 0x89, 0xfc, 0xb3, 0xdb, 0x31, 0x69, 0x56, 0xb6,
    0x49, 0x61, 0x50, 0x56, 0x42, 0x9e, 0x3d, 0x9a, 0xdc, 0x9d, 0x17, 0xb9, 0x31, 0x1f, 0x00, 0xdc,
    0x7d, 0xe8, 0xbf, 0x7a, 0x3d, 0x44, 0x71, 0x37, 0xc8, 0x90, 0x07, 0xcc, 0x16, 0xa6, 0x65, 0x4d,
    0xb8, 0x6c, 0xd0, 0x7e, 0x20, 0xfc, 0x3d, 0x2f, 0x60, 0xfe, 0x93, 0x82, 0x53, 0xb3, 0x66, 0xff,
    0x71, 0xcd, 0x85, 0xee, 0x98, 0xa5, 0x2d, 0x47, 0x9c, 0xea, 0x49, 0x0f, 0xaa, 0x2a, 0xc1, 0xed,
];

static CMC42_ADDRESS_0_7_XOR: [u8; 256] = [
    0x62, 0xd8, 0x22, 0x14, 0x50, 0x7f, 0xdf, 0x36, 0x55, 0x3e, 0xdd, 0x0f, 0xaa, 0x52, 0x35, 0xc2,
    0x73, 0xba, 0x88, 0xdc, 0xcd, 0xb5, 0xc1, 0xdc, 0x0e, 0x49, 0xb7, 0xee, 0x18, 0x9d, 0xc7, 0xb7,
    0x94, 0xca, 0xcd, 0xbb, 0xe2, 0x39, 0x96, 0x0c, 0xac, 0x1d, 0x87, 0x00, 0x93, 0xfa, 0xd8, 0x61,
    0x9a, 0xcb, 0x45, 0x60, 0x1f, 0xb3, 0xe0, 0x72, 0xd1, 0xa5, 0x2f, 0x8d, 0xbe, 0x2c, 0x6a, 0xc7,
    0xc3, 0x56, 0xea, 0x69, 0x98, 0x0e, 0xd1, 0x44, 0x94, 0x4e, 0x02, 0xf7, 0x82, 0xb2, 0x99, 0x01,
    0xdb, 0xd2, 0xc1, 0x04, 0x0d, 0x6a, 0x9d, 0xbd, 0xf9, 0x53, 0x19, 0x73, 0x5c, 0x32, 0xfd, 0x22,
    0x9e, 0x74, 0x64, 0xb7, 0xbb, 0x18, 0x8a, 0x0f, 0xe5, 0x5a, 0x49, 0xfd, 0x31, 0x3c, 0x3a, 0x10,
    0x1a, 0xa0, 0xff, 0x6a, 0x7a, 0xd1, 0xbe, 0x90, 0xad, 0x8a, 0x6d, 0x39, 0x75, 0xc1, 0xac, 0x7c,
    0x61, 0xfc, 0x0f, 0xb3, 0xb5, 0x48, 0x39, 0x25, 0x98, 0xcd, 0xa2, 0x6b, 0xe9, 0xee, 0x83, 0xf1,
    0x8f, 0x74, 0xd0, 0x6d, 0xb0, 0xaf, 0x5e, 0x26, 0xfc, 0xad, 0xf7, 0x2d, 0xc6, 0x64, 0x72, 0x42,
    0xe1, 0x5b, 0x77, 0xb0, 0x2f, 0x57, 0x78, 0x83, 0xaf, 0xd7, 0x53, 0x2c, 0x76, 0xf4, 0xf6, 0x74,
    0x17, 0x96, 0xa3, 0x80, 0x25, 0xb3, 0xf0, 0x86, 0xdb, 0x60, 0x24, 0xe1, 0x07, 0xe7, 0xca, 0xec,
    0x50, 0xec, 0x32, 0x71, 0xef, 0xb7, 0x54, 0x9d, 0x0b, 0x3e, 0xb1, 0x76, 0x01, 0x96, 0xfe, 0x2b,
    0x8e, 0x41, 0xb6, 0x58, 0x74, 0xc5, 0xca, 0x73, 0xdd, 0xc8, 0x6a, 0x9d, 0x12, 0x06, 0x23, 0x98,
    0x35, 0x4c, 0x33, 0x37, 0xf7, 0xa1, 0xec, 0xae, 0xa3, 0xee, 0x86, 0xa4, 0xac, 0x6a, 0xee, 0xe1,
    0x16, 0x49, 0x4d, 0xed, 0x53, 0x8f, 0x2c, 0x1b, 0x87, 0x2b, 0x4f, 0x3d, 0x7a, 0x94, 0x14, 0xf8,
];

pub(crate) static CMC42: CmcTables = CmcTables {
    type0_t03: &CMC42_TYPE0_T03,
    type0_t12: &CMC42_TYPE0_T12,
    type1_t03: &CMC42_TYPE1_T03,
    type1_t12: &CMC42_TYPE1_T12,
    address_8_15_xor1: &CMC42_ADDRESS_8_15_XOR1,
    address_8_15_xor2: &CMC42_ADDRESS_8_15_XOR2,
    address_16_23_xor1: &CMC42_ADDRESS_16_23_XOR1,
    address_16_23_xor2: &CMC42_ADDRESS_16_23_XOR2,
    address_0_7_xor: &CMC42_ADDRESS_0_7_XOR,
};

static CMC50_TYPE0_T03: [u8; 256] = [
    0x8b, 0xc9, 0xd7, 0xbc, 0xba, 0xcd, 0xbf, 0x0c, 0xc4, 0x70, 0x1b, 0xc7, 0x7b, 0x56, 0x07, 0x4a,
    0xe7, 0x42, 0x51, 0x76, 0xbf, 0xb4, 0x58, 0x68, 0x8a, 0x84, 0x28, 0xa3, 0x33, 0x08, 0x02, 0x4c,
    0x95, 0x98, 0xbc, 0x0c, 0xa1, 0xff, 0x34, 0x7c, 0xfe, 0xbd, 0x1a, 0xe6, 0x66, 0x8e, 0xa0, 0xf6,
    0xb1, 0x04, 0x14, 0xc5, 0x6c, 0x3f, 0x37, 0x05, 0x54, 0x13, 0x88, 0xb4, 0xf6, 0x01, 0x29, 0xae,
    0xeb, 0x40, 0xf7, 0xd6, 0x42, 0x50, 0x6f, 0xdf, 0xc0, 0x4a, 0x32, 0x25, 0x4d, 0xcb, 0x84, 0xad,
    0x98, 0xec, 0x61, 0x57, 0xaf, 0xdc, 0x8e, 0x3d, 0x0c, 0x95, 0xbb, 0xc5, 0xd2, 0x04, 0x7d, 0x24,
    0xb0, 0x69, 0x8f, 0x87, 0xa4, 0x97, 0xb3, 0x54, 0x3d, 0x6c, 0x4c, 0x5f, 0x58, 0x38, 0xef, 0x88,
    0x0a, 0xfb, 0x5f, 0x39, 0x31, 0x65, 0x18, 0x64, 0x8c, 0xaa, 0xa4, 0x22, 0xab, 0x50, 0x76, 0xa6,
    0xcd, 0xd3, 0xc5, 0x20, 0xef, 0xf3, 0xd3, 0x0e, 0x24, 0x07, 0xa5, 0xe3, 0x64, 0x4d, 0x97, 0x9b,
    0x8f, 0xa5, 0xdf, 0x40, 0xe0, 0x7d, 0x52, 0x3f, 0xb6, 0x02, 0x96, 0x7f, 0xcc, 0xe6, 0x8d, 0x75,
    0x22, 0xcc, 0x2a, 0xba, 0xf2, 0x78, 0x52, 0xa1, 0x94, 0x8c, 0x3f, 0xf8, 0xf0, 0x51, 0x5e, 0x90,
    0x89, 0x40, 0x34, 0x3c, 0x0b, 0xcd, 0x26, 0xd7, 0x1f, 0x74, 0xcc, 0xd1, 0xa4, 0x90, 0x49, 0x31,
    0x39, 0x17, 0x37, 0xd7, 0x7f, 0x37, 0xba, 0x4e, 0x5a, 0x32, 0x8b, 0x20, 0x0e, 0x3f, 0x12, 0xcf,
    0xee, 0x2b, 0x58, 0x6e, 0xb2, 0x2e, 0x55, 0xb9, 0x58, 0x07, 0x96, 0xb3, 0x61, 0x9b, 0xb2, 0x33,
    0x25, 0x72, 0xb0, 0x56, 0xc2, 0xb7, 0xdb, 0x41, 0x95, 0x80, 0x39, 0x4d, 0xff, 0x06, 0xd7, 0x1b,
    0x5a, 0x27, 0x3d, 0x40, 0x43, 0x81, 0xe4, 0x8a, 0xd7, 0x34, 0x7a, 0x1a, 0x03, 0x94, 0x9a, 0xe6,
];

static CMC50_TYPE0_T12: [u8; 256] = [
    0x9a, 0xe9, 0x6d, 0xaa, 0x1e, 0xb4, 0xfd, 0xb6, 0xb1, 0x3a, 0x78, 0x4c, 0x4b, 0x36, 0xeb, 0xc2,
    0x34, 0x65, 0x3e, 0x91, 0xb5, 0xc9, 0x45, 0x88, 0x5e, 0x26, 0xc3, 0x1e, 0xbb, 0xfe, 0xad, 0x94,
    0x6e, 0x3b, 0x2e, 0xb3, 0xed, 0xeb, 0xef, 0x92, 0x62, 0x94, 0xad, 0xfa, 0x22, 0xe2, 0x3b, 0x87,
    0x3a, 0x3d, 0x51, 0x20, 0xec, 0x67, 0x12, 0xdc, 0x7b, 0xf4, 0xfa, 0xa8, 0x0a, 0xc4, 0x1b, 0x2e,
    0xd6, 0xcb, 0xf5, 0xad, 0x33, 0xaa, 0x23, 0x57, 0x94, 0x68, 0x4b, 0x45, 0xa5, 0x8d, 0x86, 0xea,
    0x6c, 0x66, 0x55, 0x40, 0x93, 0x3f, 0x9e, 0x64, 0xc4, 0xe4, 0xbc, 0xb0, 0xd8, 0xc4, 0x49, 0x75,
    0x98, 0x5f, 0x7c, 0x61, 0xa6, 0x38, 0x03, 0xf6, 0xe3, 0x18, 0xf7, 0x70, 0xde, 0x1f, 0xf4, 0xf9,
    0x8f, 0x0f, 0xc5, 0x00, 0x39, 0xb4, 0xf0, 0x11, 0x9a, 0xd1, 0x2c, 0x6c, 0x46, 0xca, 0x8a, 0x68,
    0xaf, 0x48, 0xe8, 0xcb, 0xe5, 0xab, 0xca, 0x03, 0x8e, 0xbc, 0x86, 0xa3, 0x81, 0x98, 0xb9, 0xe9,
    0x72, 0x6c, 0xba, 0x07, 0xcb, 0x88, 0x02, 0x65, 0xcc, 0xab, 0x9c, 0xa0, 0x9e, 0x4d, 0x6a, 0x2c,
    0x35, 0x0d, 0x13, 0x14, 0xf4, 0x3c, 0x43, 0xcd, 0x2e, 0x3e, 0x69, 0xdc, 0x11, 0x89, 0xbf, 0x2a,
    0x85, 0xaf, 0xe6, 0x32, 0xf3, 0x3b, 0x3c, 0xf5, 0x90, 0x1c, 0x14, 0xb2, 0x42, 0x0f, 0x69, 0xf2,
    0xcd, 0xf8, 0xf8, 0x75, 0x9a, 0x04, 0x05, 0x23, 0x1c, 0xe9, 0x84, 0x64, 0x34, 0xfe, 0x2e, 0x22,
    0x51, 0xcc, 0x00, 0xa5, 0xe6, 0x5e, 0x8d, 0x1d, 0x5d, 0xd1, 0xdc, 0xea, 0x16, 0x5d, 0x87, 0x3e,
    0x0b, 0x14, 0xf9, 0x16, 0xb2, 0x34, 0x50, 0x9f, 0x78, 0x19, 0xfb, 0x84, 0x78, 0xe7, 0x2c, 0xa0,
    0x47, 0xca, 0x39, 0x92, 0x76, 0x4b, 0x8b, 0xa5, 0xc1, 0xfc, 0x4f, 0x43, 0x2c, 0x1c, 0x87, 0xbb,
];

static CMC50_TYPE1_T03: [u8; 256] = [
    0xf7, 0xe2, 0xe8, 0x80, 0x5c, 0x3b, 0x4a, 0x5c, 0xba, 0x9c, 0xa8, 0x1a, 0xbf, 0xf6, 0xd0, 0x6d,
    0xa6, 0x63, 0x5a, 0x16, 0x56, 0x4f, 0xdc, 0x57, 0x13, 0x57, 0xe8, 0x49, 0x8c, 0x11, 0x90, 0x2f,
    0x68, 0x53, 0x15, 0x07, 0xce, 0x36, 0x35, 0x0f, 0x08, 0x81, 0x89, 0x2c, 0xfb, 0x0b, 0xb9, 0x50,
    0xf1, 0xf3, 0xfd, 0x84, 0xe1, 0xd3, 0x60, 0xeb, 0x25, 0xe6, 0xb4, 0x35, 0x79, 0xbc, 0xd4, 0xa7,
    0xcb, 0xf9, 0x0e, 0xd0, 0x38, 0x7b, 0xa2, 0xb7, 0x3e, 0x06, 0x4b, 0x53, 0x67, 0x60, 0xd0, 0x4b,
    0xdf, 0xfd, 0xc9, 0x62, 0xf6, 0xf2, 0xad, 0xcb, 0xc7, 0xb2, 0x2c, 0x59, 0x1e, 0x63, 0xe2, 0xb7,
    0xf6, 0xbf, 0x1a, 0xe5, 0xc0, 0x31, 0x92, 0x58, 0xc6, 0xf3, 0xe9, 0x60, 0xd6, 0xe5, 0x02, 0x61,
    0x61, 0x48, 0xd0, 0xf5, 0xab, 0x43, 0xd4, 0x40, 0x40, 0xd1, 0xc6, 0xf2, 0xd1, 0x66, 0xe9, 0x6e,
    0xd7, 0x69, 0xad, 0x2c, 0xcd, 0xe8, 0x8b, 0xab, 0x74, 0x31, 0xf2, 0xea, 0xfb, 0xbb, 0x3e, 0x07,
    0xb3, 0xb8, 0xb6, 0x41, 0x22, 0x2e, 0x4a, 0x43, 0x3c, 0x69, 0x0c, 0x6d, 0x8b, 0x5e, 0x1a, 0x02,
    0x9b, 0x0e, 0x88, 0xbb, 0xba, 0xbc, 0x04, 0x12, 0x94, 0xdd, 0xe1, 0x1d, 0xd2, 0xa6, 0x4d, 0x2b,
    0xd0, 0x66, 0x9f, 0x9d, 0xf4, 0xa9, 0x17, 0xad, 0xb4, 0xef, 0xc0, 0x75, 0x38, 0x58, 0x7c, 0xb6,
    0xf2, 0xb5, 0x2e, 0xb1, 0xc7, 0x30, 0xb9, 0xb1, 0x7f, 0x3e, 0xf3, 0xa2, 0x5c, 0x85, 0x6e, 0xb3,
    0xdb, 0x54, 0x11, 0x61, 0xa2, 0xe6, 0x88, 0xca, 0xa1, 0x18, 0x23, 0xcf, 0x95, 0x34, 0x6f, 0xdc,
    0x8d, 0xfd, 0x8e, 0x8d, 0xcc, 0x78, 0xdf, 0xb5, 0x69, 0xba, 0xd7, 0x48, 0xb7, 0x7a, 0x70, 0xfb,
    0x7f, 0x83, 0x6a, 0xbf, 0xa4, 0xb9, 0x72, 0x9b, 0x3b, 0xf2, 0x49, 0x90, 0xe7, 0xd5, 0x68, 0xfa,
];

static CMC50_TYPE1_T12: [u8; 256] = [
    0x68, 0xe2, 0x22, 0x15, 0xf3, 0x61, 0x25, 0xa7, 0xb8, 0x4b, 0xf8, 0x42, 0x50, 0x6f, 0xd6, 0xd8,
    0x43, 0x9e, 0x30, 0x93, 0xbf, 0xc7, 0x8c, 0xc1, 0x79, 0xa3, 0xd1, 0x06, 0xcd, 0x96, 0xce, 0xc0,
    0x1b, 0xfa, 0xfe, 0xb2, 0xf9, 0x47, 0xc1, 0x43, 0x75, 0x0d, 0x80, 0xd8, 0xd9, 0x05, 0x76, 0x73,
    0x5f, 0xc4, 0x15, 0x68, 0x65, 0x0d, 0xf6, 0x6e, 0x29, 0x55, 0xf1, 0x25, 0x08, 0x82, 0x68, 0xcc,
    0xd6, 0xa2, 0xa4, 0xc5, 0x4e, 0x36, 0x3c, 0x32, 0xf3, 0x25, 0xea, 0x65, 0x88, 0x67, 0x62, 0x8a,
    0xc1, 0x3d, 0x56, 0xe4, 0x15, 0x66, 0x4a, 0xbf, 0x93, 0xf9, 0x5b, 0x0d, 0xc7, 0x19, 0xb1, 0xd4,
    0xf4, 0x50, 0x98, 0xba, 0xc5, 0xf0, 0x4a, 0xd4, 0x66, 0x3e, 0x89, 0x49, 0xfa, 0x8e, 0xf8, 0xbd,
    0xbe, 0xcb, 0x2e, 0xce, 0x6f, 0x48, 0x91, 0x68, 0xfe, 0xd0, 0x9e, 0x80, 0xb7, 0x83, 0x51, 0x9f,
    0xb9, 0xae, 0x85, 0x05, 0x97, 0xaf, 0x70, 0xf6, 0xb5, 0x67, 0x01, 0xd1, 0x0e, 0x52, 0xb8, 0x9c,
    0xf0, 0x4f, 0xb5, 0x3c, 0xc6, 0x17, 0x44, 0xe2, 0x58, 0x53, 0x01, 0x53, 0x0a, 0x26, 0xf1, 0xc5,
    0x44, 0x6f, 0x0e, 0x31, 0xb5, 0xf1, 0x3a, 0x8e, 0x1c, 0x6f, 0xe1, 0x18, 0x1f, 0xe0, 0x6f, 0x13,
    0xc0, 0xf8, 0xcd, 0xae, 0x73, 0xc6, 0x7c, 0x5f, 0x1e, 0xf4, 0x78, 0x46, 0x25, 0xe3, 0xb8, 0xc4,
    0xb4, 0xc1, 0xc2, 0xf2, 0xb0, 0x15, 0x98, 0x99, 0xab, 0xa5, 0xc2, 0x14, 0xe8, 0x2a, 0xb5, 0xb2,
    0xc5, 0x7f, 0x9b, 0x48, 0x4b, 0x6e, 0x16, 0x90, 0xc1, 0xb4, 0x9f, 0x32, 0xe6, 0x1e, 0xe8, 0xd5,
    0x3b, 0x05, 0xe8, 0xac, 0xa8, 0x2d, 0x69, 0x59, 0xee, 0x4a, 0xd2, 0x7a, 0xb7, 0x7e, 0xcc, 0xe3,
    0x53, 0x10, 0x45, 0xe5, 0x46, 0xbc, 0x3d, 0x75, 0x47, 0x83, 0x81, 0x53, 0xbf, 0x0e, 0xc2, 0x23,
];

static CMC50_ADDRESS_8_15_XOR1: [u8; 256] = [
    0xe1, 0x68, 0xf2, 0xa9, 0x4a, 0x84, 0xb1, 0x90, 0x0b, 0xbf, 0x95, 0x9c, 0xe4, 0x53, 0x86, 0xef,
    0x85, 0xd9, 0x50, 0xba, 0x32, 0x06, 0xd2, 0xdd, 0x39, 0x44, 0xb8, 0x90, 0x69, 0x30, 0x66, 0x67,
    0xd5, 0x03, 0x7e, 0x84, 0xe5, 0x0f, 0x6b, 0xe0, 0x6a, 0x07, 0xd9, 0x1e, 0xf0, 0xe9, 0x92, 0xb5,
    0xc0, 0x03, 0xfd, 0x73, 0x6c, 0x52, 0x41, 0xb2, 0x0a, 0x51, 0xdd, 0xa3, 0x17, 0xf4, 0x42, 0x05,
    0x30, 0xa5, 0xcf, 0x64, 0x04, 0x56, 0x40, 0xa8, 0xa2, 0x97, 0xc4, 0x5a, 0x9f, 0xf6, 0x0a, 0x79,
    0xcd, 0x09, 0x85, 0x54, 0xc7, 0x17, 0x56, 0x30, 0x32, 0x93, 0x5a, 0x6e, 0x24, 0xa4, 0x46, 0x28,
    0xbe, 0xd6, 0x2b, 0x9f, 0x0f, 0xc6, 0x67, 0x87, 0x7e, 0xc0, 0xb9, 0xfe, 0x81, 0xfd, 0x94, 0xeb,
    0x4b, 0x5b, 0xe7, 0xc4, 0xeb, 0x5d, 0x84, 0x1a, 0x1c, 0xc0, 0x00, 0x30, 0x51, 0xac, 0x5c, 0x42,
    0x7d, 0xc5, 0x5d, 0x35, 0xbd, 0x2c, 0x7c, 0x71, 0x26, 0xd3, 0x9e, 0x8a, 0xbd, 0xb3, 0x31, 0xf2,
    0x3a, 0xfb, 0xed, 0x9a, 0xb9, 0x89, 0x6d, 0xfd, 0x11, 0xe6, 0x32, 0x6d, 0x08, 0x8f, 0x8a, 0x9b,
    0x4d, 0xc1, 0x56, 0xc3, 0x90, 0x31, 0xa1, 0xc9, 0xee, 0x8c, 0xa2, 0x31, 0xc5, 0x2a, 0xa1, 0x17,
    0xa0, 0x73, 0x68, 0xbf, 0x84, 0x37, 0xc6, 0xfe, 0x97, 0x6d, 0x9e, 0x51, 0x15, 0x42, 0x16, 0xa1,
    0x05, 0xb2, 0x9a, 0x02, 0xff, 0x10, 0x51, 0xd3, 0x13, 0x4b, 0xb4, 0x81, 0xc7, 0x31, 0xc1, 0x7e,
    0x33, 0xb5, 0x3d, 0x19, 0xfb, 0x96, 0x94, 0xdf, 0xec, 0x91, 0x7a, 0x2a, 0xda, 0x81, 0x3a, 0x72,
    0x63, 0x2d, 0xc6, 0xf3, 0x2d, 0x3f, 0x2f, 0x13, 0x91, 0x35, 0xb7, 0x41, 0x3f, 0x35, 0xeb, 0xf2,
    0x9a, 0xca, 0x86, 0x61, 0xed, 0xcf, 0x9d, 0xcc, 0x3e, 0xcc, 0x50, 0x5d, 0x9e, 0x82, 0xbf, 0x8d,
];

static CMC50_ADDRESS_8_15_XOR2: [u8; 256] = [
    0x73, 0x87, 0x3d, 0x7f, 0xc3, 0x13, 0xec, 0x42, 0xf6, 0xc4, 0xf9, 0x7b, 0x13, 0x74, 0x46, 0x2b,
    0x48, 0x62, 0x7e, 0x11, 0x98, 0xc9, 0x75, 0xa0, 0xd9, 0x94, 0xdc, 0xd5, 0x44, 0xe4, 0x94, 0xc4,
    0xbf, 0x03, 0xc2, 0x13, 0x6b, 0x20, 0x76, 0x7e, 0xa5, 0xe5, 0x89, 0x62, 0xc3, 0x13, 0x61, 0x33,
    0xce, 0x59, 0x4e, 0x1c, 0xd4, 0x9a, 0x27, 0x5b, 0xe4, 0x52, 0x03, 0xf7, 0x1f, 0x3c, 0xb6, 0xfa,
    0x13, 0xb6, 0x7b, 0x76, 0xd9, 0x88, 0xdc, 0x95, 0x0c, 0x15, 0x9f, 0x02, 0xc3, 0x4b, 0x6b, 0xff,
    0xa3, 0xfb, 0x8d, 0x1c, 0x5f, 0xda, 0x44, 0x1d, 0x27, 0xa4, 0xa0, 0xca, 0x5a, 0x1c, 0x03, 0x8d,
    0x31, 0x1f, 0xa4, 0x7e, 0x49, 0x8b, 0xf9, 0x9c, 0xb4, 0xc7, 0xa0, 0xd7, 0xc3, 0x3b, 0x4e, 0xa4,
    0xe9, 0xdf, 0x36, 0xca, 0x49, 0xc8, 0x94, 0x22, 0x91, 0xc1, 0x77, 0x22, 0xde, 0x96, 0x62, 0xa0,
    0xaf, 0xf5, 0x07, 0xcb, 0x0c, 0x60, 0x1f, 0xb4, 0x5c, 0x1a, 0x18, 0x3e, 0xdc, 0x99, 0x11, 0x33,
    0xa9, 0xd7, 0x11, 0x16, 0x81, 0x8a, 0xea, 0xdd, 0xf6, 0x22, 0x25, 0x89, 0x87, 0x8b, 0x57, 0x13,
    0x4f, 0xef, 0xc3, 0x15, 0x94, 0x76, 0x16, 0x8f, 0xb6, 0x6d, 0x6f, 0x6a, 0x78, 0x57, 0xbd, 0xa0,
    0x0a, 0xb0, 0xd8, 0xe6, 0x90, 0xe9, 0xa2, 0x35, 0xf5, 0xd7, 0x95, 0x61, 0xf3, 0x8c, 0x71, 0x00,
    0x18, 0x7b, 0x8a, 0xf2, 0x54, 0x88, 0xfa, 0x62, 0xac, 0x31, 0x86, 0xaa, 0x4f, 0x61, 0x26, 0xf6,
    0x82, 0xed, 0x14, 0xe4, 0x52, 0xc6, 0x50, 0x52, 0x3d, 0xe5, 0xb7, 0x43, 0x3b, 0x72, 0x1e, 0x6b,
    0x4d, 0x2b, 0x3f, 0xb6, 0xad, 0x8b, 0x44, 0xa7, 0x94, 0x78, 0x5b, 0x4c, 0x40, 0x39, 0x4c, 0xcd,
    0xe8, 0x7a, 0xcc, 0x3b, 0x56, 0x37, 0xe6, 0xc5, 0x8b, 0xc0, 0xa0, 0xeb, 0x00, 0x78, 0xa7, 0xe8,
];

static CMC50_ADDRESS_16_23_XOR1: [u8; 256] = [
    0x24, 0x08, 0x00, 0x52, 0x0a, 0xb2, 0xa8, 0x98, 0x2e, 0x9d, 0x9f, 0xc6, 0xa1, 0xd9, 0x58, 0x8f,
    0x1b, 0x75, 0x0a, 0x4c, 0x5f, 0x6a, 0x84, 0x13, 0xae, 0x4f, 0x8f, 0xc9, 0x8a, 0x04, 0xaa, 0xa1,
    0x15, 0x21, 0x99, 0xaa, 0x09, 0x6c, 0x5b, 0xad, 0xc3, 0xee, 0x08, 0x60, 0xd2, 0x16, 0xce, 0x29,
    0xba, 0x3f, 0x7c, 0x27, 0x1d, 0x27, 0x14, 0x24, 0x35, 0xc9, 0x3a, 0xea, 0x4a, 0x89, 0xdf, 0x04,
    0x43, 0x8d, 0x8a, 0x76, 0x82, 0x8e, 0x85, 0x1a, 0xd9, 0x4b, 0x55, 0x79, 0x66, 0x6d, 0xd5, 0x51,
    0x92, 0x7d, 0x9d, 0x21, 0x4f, 0x40, 0xfd, 0x18, 0xab, 0x92, 0x20, 0x4a, 0xad, 0x13, 0xdc, 0xa1,
    0xc5, 0x38, 0x8f, 0x61, 0x78, 0x70, 0x8d, 0x4e, 0x7c, 0x83, 0x8a, 0x85, 0xa5, 0x83, 0x0d, 0xf2,
    0xf6, 0x06, 0xc4, 0xbe, 0x58, 0xd4, 0xd5, 0x47, 0x00, 0x2e, 0x20, 0x1b, 0xa5, 0x27, 0xef, 0x7a,
    0xdf, 0x08, 0x64, 0xcd, 0x1d, 0x7c, 0x13, 0x38, 0xe0, 0xcd, 0x9d, 0x27, 0x6a, 0xdf, 0x08, 0xc7,
    0xb6, 0xc4, 0x85, 0x7e, 0x90, 0xc5, 0xed, 0xce, 0xa7, 0x2e, 0x67, 0x5f, 0x63, 0x18, 0xa5, 0x30,
    0xc7, 0x73, 0xc8, 0x0a, 0x29, 0x32, 0x9b, 0xf1, 0x68, 0x4b, 0x7e, 0xff, 0x0d, 0xba, 0x57, 0xa5,
    0x3f, 0xe2, 0x3d, 0xe1, 0xab, 0xe0, 0x00, 0x5b, 0x0b, 0xe3, 0x8f, 0x00, 0x5b, 0x2c, 0x59, 0xe5,
    0x0a, 0xab, 0x6f, 0xea, 0x69, 0x2d, 0x6e, 0x52, 0x47, 0xe8, 0xa6, 0xc2, 0x0f, 0x91, 0x66, 0x54,
    0x5a, 0x4a, 0x67, 0xac, 0xb4, 0xe3, 0xa7, 0x40, 0x5b, 0xba, 0xe5, 0xe2, 0xd5, 0xe7, 0xdb, 0x44,
    0x65, 0xf3, 0x4e, 0x05, 0xe5, 0xba, 0x2a, 0x2d, 0xbc, 0x54, 0x23, 0x27, 0x35, 0x11, 0xd5, 0xa3,
    0x85, 0x91, 0x91, 0x1f, 0x85, 0x55, 0x17, 0x1f, 0xa2, 0xe6, 0xeb, 0x94, 0xac, 0x86, 0x7b, 0x24,
];

static CMC50_ADDRESS_16_23_XOR2: [u8; 256] = [
    0x48, 0xd7, 0x17, 0x08, 0xf4, 0x0b, 0x44, 0x12, 0xb1, 0x12, 0xd9, 0x49, 0xdf, 0x94, 0x75, 0x75,
    0x90, 0xd5, 0xcb, 0xeb, 0x7f, 0x3b, 0x81, 0x11, 0x39, 0x8c, 0x7f, 0xb6, 0x51, 0xf8, 0xda, 0xc8,
    0xb3, 0x39, 0xb5, 0x34, 0xa2, 0x20, 0x1f, 0xe4, 0x4e, 0x27, 0x4c, 0xca, 0x62, 0xf1, 0x2d, 0x19,
    0x7f, 0xf0, 0xa9, 0xb1, 0x5e, 0xcb, 0xb6, 0x0f, 0xfd, 0x65, 0x5b, 0x8a, 0x11, 0x66, 0x65, 0x27,
    0x36, 0xe2, 0x9d, 0xf7, 0xb8, 0x0f, 0xdb, 0x28, 0x69, 0x70, 0x89, 0x78, 0x4f, 0xd6, 0xa2, 0xb0,
    0xb4, 0xca, 0x1c, 0x2b, 0xfc, 0xeb, 0x91, 0x02, 0x07, 0xbc, 0x98, 0x81, 0xd7, 0x4c, 0x97, 0x28,
    0x7a, 0x7a, 0xf0, 0x7b, 0x06, 0x99, 0xe2, 0xc6, 0xa3, 0x08, 0xe2, 0xe8, 0xce, 0xc4, 0xb8, 0xfe,
    0x38, 0x48, 0x65, 0x64, 0xe9, 0x0f, 0xb7, 0xfd, 0xaf, 0x58, 0x07, 0xd9, 0xa4, 0x60, 0x6d, 0x69,
    0xc4, 0xa3, 0xbd, 0x98, 0x6f, 0xd7, 0xe1, 0x63, 0x4b, 0x35, 0x1e, 0x09, 0xe7, 0xf0, 0x27, 0xd1,
    0x40, 0xc4, 0xe9, 0x0a, 0x08, 0xb2, 0x7b, 0x40, 0x6d, 0xc6, 0x38, 0xbb, 0x25, 0x24, 0xff, 0xcc,
    0xd6, 0x07, 0xd1, 0x4b, 0x34, 0x34, 0xfb, 0x06, 0x36, 0x3c, 0x38, 0x5f, 0x20, 0x3a, 0xd4, 0xb2,
    0x7c, 0xde, 0x77, 0x0f, 0x86, 0x52, 0x71, 0x35, 0xa9, 0x1c, 0x7c, 0x1e, 0x13, 0x04, 0xdc, 0xe4,
    0x31, 0x58, 0xd9, 0xb8, 0xcc, 0x45, 0x89, 0x98, 0x5f, 0x62, 0x85, 0xf4, 0x2d, 0xbc, 0xa8, 0x4a,
    0x8e, 0x45, 0x36, 0xcf, 0x27, 0x9e, 0xda, 0x32, 0xb9, 0xe5, 0x02, 0x7d, 0xe1, 0x9c, 0x87, 0xf9,
    0x49, 0xa3, 0x27, 0xd5, 0xfa, 0x85, 0xa4, 0x78, 0xe1, 0xe5, 0x26, 0x7b, 0x85, 0x15, 0x94, 0xad,
    0xb7, 0xe2, 0xa0, 0xed, 0xba, 0x2f, 0xa6, 0xc8, 0xa8, 0x1e, 0x3f, 0xd3, 0x23, 0x20, 0x98, 0x16,
];

static CMC50_ADDRESS_0_7_XOR: [u8; 256] = [
    0x5c, 0xa2, 0x7e, 0xcf, 0xa2, 0x7f, 0x04, 0x2e, 0x6f, 0xd7, 0x6b, 0xe3, 0x4a, 0x07, 0xa3, 0x73,
    0x03, 0x2f, 0xaa, 0xd5, 0x06, 0x39, 0xb0, 0x2b, 0x21, 0x8c, 0x2f, 0x24, 0x8a, 0x91, 0x43, 0xdc,
    0xe6, 0x97, 0xb8, 0x16, 0x5f, 0x94, 0x36, 0x6f, 0x37, 0x1a, 0x01, 0x1c, 0xf9, 0xa3, 0x96, 0xc9,
    0x0d, 0x1e, 0xa7, 0x77, 0xda, 0xc8, 0x01, 0xda, 0x3d, 0x2f, 0x2b, 0x85, 0xcc, 0xfa, 0x39, 0x34,
    0x79, 0xb2, 0x07, 0x6f, 0x21, 0xae, 0x9b, 0x37, 0xc0, 0xcd, 0x28, 0xa8, 0x40, 0x03, 0xff, 0x0e,
    0x2a, 0x83, 0x8d, 0x04, 0xf8, 0xc3, 0xff, 0x34, 0x85, 0x59, 0xa8, 0xe6, 0x39, 0x96, 0xef, 0x5d,
    0x43, 0x0e, 0xa1, 0x5f, 0xe4, 0xa3, 0x7e, 0x35, 0x02, 0x98, 0x61, 0xea, 0x57, 0xdb, 0xbd, 0xae,
    0x40, 0xd1, 0x15, 0xa3, 0xc7, 0x23, 0x70, 0xaa, 0xa5, 0x7c, 0x0e, 0xa0, 0xc4, 0xb8, 0xe3, 0x72,
    0x24, 0x65, 0xc7, 0x82, 0xef, 0xdf, 0x71, 0x31, 0x5b, 0x4e, 0x9f, 0xd2, 0x19, 0x96, 0x2f, 0x64,
    0x1d, 0x80, 0xad, 0xd5, 0x8b, 0xfb, 0xbe, 0x1c, 0xcd, 0xe4, 0xf5, 0x1f, 0x00, 0xea, 0x44, 0xbc,
    0x45, 0xd3, 0x65, 0x7d, 0xa8, 0x3e, 0x9d, 0x3a, 0xd8, 0xe1, 0x4a, 0x2b, 0x7c, 0x91, 0x11, 0x58,
    0x13, 0x4d, 0x2e, 0xf4, 0x89, 0xb8, 0x16, 0xa3, 0x1a, 0x5d, 0xf6, 0xf5, 0xb3, 0x89, 0x4b, 0xa0,
    0x91, 0xa9, 0xeb, 0x76, 0x15, 0xa2, 0xba, 0x82, 0x2f, 0x13, 0xf6, 0x02, 0xe2, 0x58, 0x7f, 0x75,
    0x5d, 0x55, 0x11, 0xf2, 0xc1, 0x3e, 0x2e, 0x9a, 0x79, 0xd5, 0xea, 0xfc, 0xf5, 0xea, 0x32, 0x66,
    0x7d, 0x95, 0x02, 0xc2, 0x04, 0xfc, 0x81, 0x03, 0xf9, 0x36, 0x3e, 0xcb, 0xa7, 0xde, 0x8f, 0x56,
    0x86, 0x14, 0xf6, 0xf5, 0xae, 0x19, 0xd5, 0x2a, 0xa1, 0x4f, 0x5a, 0x30, 0x37, 0x07, 0xb8, 0x6e,
];

pub(crate) static CMC50: CmcTables = CmcTables {
    type0_t03: &CMC50_TYPE0_T03,
    type0_t12: &CMC50_TYPE0_T12,
    type1_t03: &CMC50_TYPE1_T03,
    type1_t12: &CMC50_TYPE1_T12,
    address_8_15_xor1: &CMC50_ADDRESS_8_15_XOR1,
    address_8_15_xor2: &CMC50_ADDRESS_8_15_XOR2,
    address_16_23_xor1: &CMC50_ADDRESS_16_23_XOR1,
    address_16_23_xor2: &CMC50_ADDRESS_16_23_XOR2,
    address_0_7_xor: &CMC50_ADDRESS_0_7_XOR,
};

static M1_ADDRESS_8_15_XOR: [u8; 256] = [
    0x59, 0xe2, 0x23, 0x0f, 0xe1, 0x37, 0xf4, 0xd3, 0x0d, 0x00, 0xab, 0xfe, 0xaa, 0x3b, 0xaa, 0x02,
    0x3d, 0xe8, 0x2e, 0x4f, 0x54, 0x4f, 0x72, 0x1d, 0xb0, 0x9e, 0xc4, 0x61, 0x9a, 0xa4, 0xc1, 0x5b,
    0x37, 0xb3, 0x80, 0x74, 0x0a, 0x94, 0x13, 0xee, 0x30, 0x69, 0x96, 0x64, 0xde, 0x9b, 0x7e, 0x97,
    0x64, 0x99, 0x23, 0x2a, 0xa2, 0x90, 0x52, 0x42, 0x9f, 0xef, 0xb6, 0xf2, 0x7a, 0x92, 0xd7, 0x1c,
    0x18, 0xf0, 0x49, 0xc5, 0x91, 0x9d, 0x96, 0x2e, 0x1b, 0x76, 0xdf, 0x77, 0x90, 0x7a, 0xf8, 0x2b,
    0xf9, 0xd0, 0x55, 0x58, 0x49, 0x1e, 0x35, 0x12, 0xc7, 0x8a, 0xeb, 0xb7, 0x95, 0xb2, 0x3a, 0xd8,
    0x8a, 0xf2, 0x3c, 0x53, 0x4c, 0x1b, 0xc7, 0x2c, 0x1d, 0x69, 0xad, 0xbf, 0x68, 0x5c, 0x42, 0x3b,
    0x91, 0xde, 0xd9, 0x22, 0x63, 0xb0, 0x39, 0xb4, 0x01, 0x37, 0xee, 0x64, 0x6b, 0xc2, 0x8e, 0xf4,
    0xb1, 0x98, 0xcd, 0x55, 0xb2, 0x0e, 0xa1, 0x51, 0xc7, 0xc6, 0x09, 0x76, 0x24, 0xc0, 0xed, 0x98,
    0x05, 0xe2, 0xac, 0x9e, 0x4d, 0x7e, 0xaf, 0xc8, 0xf2, 0x5f, 0x50, 0x2c, 0x25, 0x51, 0x51, 0xb6,
    0xaf, 0x4f, 0x26, 0x72, 0x65, 0x76, 0xa5, 0x4b, 0x7d, 0x11, 0xce, 0x26, 0x3b, 0x14, 0x4e, 0xda,
    0x59, 0x0d, 0x62, 0xaf, 0xf7, 0x16, 0x0e, 0x9c, 0x90, 0xb7, 0x65, 0x45, 0xed, 0x82, 0x29, 0x1d,
    0x3e, 0x31, 0x1a, 0x28, 0xe0, 0x1f, 0x17, 0x10, 0xbb, 0x51, 0x1a, 0x6b, 0x46, 0x22, 0xa1, 0x39,
    0xf3, 0xe0, 0x04, 0x3a, 0x11, 0x0a, 0xd0, 0xc2, 0xd7, 0x61, 0x14, 0x4d, 0x91, 0x98, 0xf2, 0xf7,
    0x23, 0xca, 0x82, 0xcc, 0x14, 0x1d, 0xb3, 0xca, 0x07, 0xd3, 0x50, 0xfc, 0x2c, 0x83, 0x46, 0xf1,
    0x5d, 0xe8, 0x07, 0x59, 0x1d, 0xff, 0xdd, 0x27, 0xb7, 0x8c, 0xf2, 0x48, 0xe7, 0x32, 0x3c, 0x0b,
];

static M1_ADDRESS_0_7_XOR: [u8; 256] = [
    0xb4, 0x29, 0x93, 0x29, 0x06, 0xc9, 0x92, 0xd9, 0x84, 0xef, 0x46, 0x44, 0x15, 0xfc, 0xcd, 0x43,
    0xe2, 0x01, 0xae, 0x86, 0x68, 0x9e, 0xa4, 0xdf, 0xb8, 0xe3, 0x55, 0x90, 0xa9, 0xf5, 0x3c, 0x15,
    0x1f, 0xec, 0xa2, 0x3b, 0xb4, 0x84, 0x58, 0x62, 0x61, 0x8e, 0xb4, 0x75, 0x97, 0x2f, 0xd3, 0x12,
    0xd2, 0x82, 0x83, 0xa1, 0x3f, 0x75, 0x89, 0xf6, 0x0f, 0x7a, 0xea, 0x4c, 0x57, 0x7a, 0xef, 0x8c,
    0x1a, 0x00, 0xff, 0x67, 0x16, 0x03, 0x2b, 0xcf, 0xd2, 0x14, 0x47, 0xf4, 0x1c, 0xf0, 0x0c, 0xbe,
    0x30, 0xb9, 0x09, 0xf8, 0x0a, 0xf9, 0x8f, 0x0e, 0x8b, 0x32, 0x49, 0x05, 0xf4, 0x6e, 0xe5, 0xbb,
    0x37, 0xf6, 0xa2, 0x18, 0xc1, 0xd7, 0xb7, 0xbd, 0x34, 0x54, 0xc5, 0x20, 0xaf, 0x2b, 0xc0, 0xe1,
    0x5c, 0x84, 0xcb, 0xd4, 0xa2, 0x70, 0xd1, 0x6c, 0xa9, 0x61, 0xf1, 0x35, 0x8e, 0x05, 0x4d, 0xf3,
    0x7e, 0x3b, 0xe7, 0x79, 0x8e, 0xf3, 0xf9, 0xe4, 0x84, 0xa8, 0x34, 0x79, 0x67, 0xc9, 0x0d, 0x2f,
    0x99, 0x1c, 0xbd, 0x2e, 0xf5, 0x5b, 0x95, 0xc1, 0x4c, 0x3c, 0x03, 0x07, 0x3e, 0xf4, 0xf1, 0xa2,
    0x8c, 0x68, 0x83, 0xe3, 0x19, 0x8a, 0xda, 0x2d, 0xa9, 0x1b, 0xb7, 0x81, 0xc7, 0x71, 0xf5, 0xba,
    0xda, 0x19, 0xbd, 0xb6, 0x27, 0xd7, 0xee, 0x2d, 0x39, 0x25, 0x56, 0x88, 0xf1, 0x74, 0xb1, 0xb4,
    0xed, 0x0d, 0x15, 0xbd, 0xd5, 0xe6, 0x39, 0x90, 0x88, 0x47, 0x68, 0x11, 0x48, 0x1b, 0x88, 0x64,
    0x98, 0x5b, 0x05, 0x52, 0x31, 0x87, 0xdb, 0xab, 0x57, 0xfc, 0xe5, 0xc4, 0x54, 0x13, 0x5a, 0x4e,
    0x6d, 0x43, 0xdf, 0x3f, 0xce, 0x98, 0x73, 0x38, 0x9a, 0x34, 0xf8, 0x90, 0x7e, 0xe7, 0xaa, 0x37,
    0xe9, 0x5e, 0xf2, 0x24, 0x85, 0x0f, 0x32, 0x9c, 0xa8, 0xed, 0x75, 0x01, 0xbd, 0xe6, 0x5d, 0x7d,
];

static M1_BLOCK_SWAPS: [[u8; 16]; 8] = [
    [4, 0, 5, 3, 11, 8, 6, 2, 12, 14, 13, 1, 9, 10, 15, 7],
    [7, 9, 6, 13, 3, 4, 15, 1, 10, 5, 2, 0, 14, 8, 11, 12],
    [14, 7, 5, 2, 12, 1, 6, 3, 9, 13, 4, 10, 11, 0, 15, 8],
    [11, 5, 13, 12, 3, 6, 15, 10, 1, 14, 2, 9, 4, 8, 7, 0],
    [11, 12, 7, 14, 8, 15, 9, 5, 2, 6, 1, 10, 0, 13, 4, 3],
    [15, 10, 11, 9, 0, 6, 2, 4, 1, 14, 12, 13, 3, 5, 8, 7],
    [15, 1, 6, 2, 14, 4, 3, 11, 8, 9, 13, 7, 10, 5, 12, 0],
    [10, 1, 11, 6, 12, 9, 8, 14, 0, 4, 2, 15, 5, 7, 13, 3],
];

pub(crate) static CMC50_M1: M1Tables = M1Tables {
    address_8_15_xor: &M1_ADDRESS_8_15_XOR,
    address_0_7_xor: &M1_ADDRESS_0_7_XOR,
    block_swaps: &M1_BLOCK_SWAPS,
};
