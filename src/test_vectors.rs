//! Handshake trace from "The Illustrated TLS 1.3 Connection" (tls13.xargs.org).
//!
//! The server there uses random 0x70..=0x8f, X25519 private key 0x90..=0xaf
//! and an RSA-PSS certificate. Our server does not send the compatibility
//! ChangeCipherSpec record, which does not enter the transcript.

use hex_literal::hex;

/// ClientHello record, header included.
pub const CLIENT_HELLO_RECORD: [u8; 207] = hex!(
    "16030100ca010000c60303000102030405060708090a0b0c0d0e0f1011121314"
    "15161718191a1b1c1d1e1f20e0e1e2e3e4e5e6e7e8e9eaebecedeeeff0f1f2f3"
    "f4f5f6f7f8f9fafbfcfdfeff0006130113021303010000770000001800160000"
    "136578616d706c652e756c666865696d2e6e6574000a00080006001d00170018"
    "000d00140012040308040401050308050501080606010201003300260024001d"
    "0020358072d6365880d1aeea329adf9121383851ed21a28e3b75e965d0d2cd16"
    "6254002d00020101002b0003020304"
);

pub const SERVER_HELLO_RECORD: [u8; 127] = hex!(
    "160303007a020000760303707172737475767778797a7b7c7d7e7f8081828384"
    "85868788898a8b8c8d8e8f20e0e1e2e3e4e5e6e7e8e9eaebecedeeeff0f1f2f3"
    "f4f5f6f7f8f9fafbfcfdfeff130100002e00330024001d00209fd7ad6dcff429"
    "8dd3f96d5b1b2af910a0535b1488d7f8fabb349a982880b615002b00020304"
);

/// EncryptedExtensions, Certificate, CertificateVerify and Finished in one record.
pub const ENCRYPTED_FLIGHT_RECORD: [u8; 1146] = hex!(
    "1703030475da1ec2d7bda8ebf73edd5010fba8089fd426b0ea1ea4d88d074ffe"
    "a8a9873af5f502261e34b1563343e9beb6132e7e836d65db6dcf00bc401935ae"
    "369c440d67af719ec03b984c4521b905d58ba2197c45c4f773bd9dd121b4d2d4"
    "e6adfffa27c2a81a99a8efe856c35ee08b71b3e441bbecaa65fe720815cab58d"
    "b3efa8d1e5b71c58e8d1fdb6b21bfc66a9865f852c1b4b640e94bd908469e715"
    "1f9bbca3ce53224a27062ceb240a105bd3132dc18544477794c373bc0fb5a267"
    "885c857d4ccb4d31742b7a29624029fd05940de3f9f9b6e0a9a237672bc624ba"
    "2893a21709833c5276d413631bdde6ae7008c697a8ef428a79dbf6e8bbeb47c4"
    "e408ef656d9dc19b8b5d49bc091e2177357594c8acd41c101c7750cb11b5be6a"
    "194b8f877088c9828e3507dada17bb14bb2c738903c7aab40c545c46aa53823b"
    "120181a16ce92876288c4acd815b233d96bb572b162ec1b9d712f2c3966caac9"
    "cf174f3aedfec4d19ff9a87f8e21e8e1a9789b490ba05f1debd21732fb2e15a0"
    "17c475c4fd00be042186dc29e68bb7ece192438f3b0c5ef8e4a53583a01943cf"
    "84bba5842173a6b3a7289566687c3018f764ab18103169919328713c3bd463d3"
    "398a1feb8e68e44cfe482f72847f46c80e6cc7f6ccf179f482c888594e762766"
    "53b48398a26c7c9e420cb6c1d3bc7646f33bb832bfba98489cadfbd55dd8b2c5"
    "7687a47acba4ab390152d8fbb3f20327d824b284d288fb0152e49fc44678aed4"
    "d3f085b7c55de77bd45af812fc37944ad2454f99fbb34a583bf16b67659e6f21"
    "6d34b1d79b1b4decc098a44207e1c5feeb6ce30acc2cf7e2b134490b44274477"
    "2d184e59038aa517a97154181e4dfd94fe72a5a4ca2e7e22bce733d03e7d9319"
    "710befbc30d7826b728519ba74690e4f906587a0382895b90d82ed3e357faf8e"
    "59aca85fd2063ab592d83d245a919ea53c501b9accd2a1ed951f43c049ab9d25"
    "c7f1b70ae4f942edb1f311f7417833062245b429d4f013ae9019ff52044c97c7"
    "3b8882cf03955c739f874a029637c0f0607100e3070f408d082aa7a2abf13e73"
    "bd1e252c228aba7a9c1f075bc439571b35932f5c912cb0b38da1c95e64fcf9bf"
    "ec0b9b0dd8f042fdf05e5058299e96e4185074919d90b7b3b0a97e2242ca08cd"
    "99c9ecb12fc49adb2b257240cc387802f00e0e49952663ea278408709bce5b36"
    "3c036093d7a05d440c9e7a7abb3d71ebb4d10bfc7781bcd66f79322c18262dfc"
    "2dccf3e5f1ea98bea3caae8a83706312764423a692ae0c1e2e23b016865ffb12"
    "5b223857547ac7e2468433b5269843abbabbe9f6f438d7e387e3617a219f6254"
    "0e7343e1bbf49355fb5a1938048439cba5cee819199b2b5c39fd351aa274536a"
    "adb682b578943f0ccf48e4ec7ddc938e2fd01acfaa1e7217f7b389285c0dfd31"
    "a1545ed3a85fac8eb9dab6ee826af90f9e1ee5d555dd1c05aec077f7c803cbc2"
    "f1cf98393f0f37838ffea372ff708886b05934e1a64512de144608864a88a5c3"
    "a173fdcfdf5725da916ed507e4caec8787befb91e3ec9b222fa09f374bd96881"
    "ac2ddd1f885d42ea584ce08b0e455a350ae54d76349aa68c71ae"
);

/// Decrypted flight, inner content type included.
pub const FLIGHT_PLAINTEXT: [u8; 1125] = hex!(
    "0800000200000b00032e0000032a0003253082032130820209a0030201020208"
    "155a92adc2048f90300d06092a864886f70d01010b05003022310b3009060355"
    "04061302555331133011060355040a130a4578616d706c65204341301e170d31"
    "38313030353031333831375a170d3139313030353031333831375a302b310b30"
    "09060355040613025553311c301a060355040313136578616d706c652e756c66"
    "6865696d2e6e657430820122300d06092a864886f70d01010105000382010f00"
    "3082010a0282010100c4803606bae7476b089404eca7b691043ff792bc19eefb"
    "7d74d7a80d001e7b4b3a4ae60fe8c071fc73e7024c0dbcf4bdd11d396bba7046"
    "4a13e94af83df3e10959547bc955fb412da3765211e1f3dc776caa53376eca3a"
    "ecbec3aab73b31d56cb6529c8098bcc9e02818e20bf7f8a03afd1704509ece79"
    "bd9f39f1ea69ec47972e830fb5ca95de95a1e60422d5eebe527954a1e7bf8a86"
    "f6466d0d9f16951a4cf7a04692595c1352f2549e5afb4ebfd77a37950144e4c0"
    "26874c653e407d7d23074401f484ffd08f7a1fa05210d1f4f0d5ce79702932e2"
    "cabe701fdfad6b4bb71101f44bad666a11130fe2ee829e4d029dc91cdd6716db"
    "b9061886edc1ba94210203010001a3523050300e0603551d0f0101ff04040302"
    "05a0301d0603551d250416301406082b0601050507030206082b060105050703"
    "01301f0603551d23041830168014894fde5bcc69e252cf3ea300dfb197b81de1"
    "c146300d06092a864886f70d01010b05000382010100591645a69a2e3779e4f6"
    "dd271aba1c0bfd6cd75599b5e7c36e533eff3659084324c9e7a504079d39e0d4"
    "2987ffe3ebdd09c1cf1d914455870b571dd19bdf1d24f8bb9a11fe80fd592ba0"
    "398cde11e2651e618ce598fa96e5372eef3d248afde17463ebbfabb8e4d1ab50"
    "2a54ec0064e92f7819660d3f27cf209e667fce5ae2e4ac99c7c93818f8b25107"
    "22dfed97f32e3e9349d4c66c9ea6396d744462a06b42c6d5ba688eac3a017bdd"
    "fc8e2cfcad27cb69d3ccdca280414465d3ae348ce0f34ab2fb9c618371312b19"
    "1041641c237f11a5d65c844f0404849938712b959ed685bc5c5dd645ed199094"
    "73402926dcb40e3469a15941e8e2cca84bb6084636a000000f00010408040100"
    "17feb533ca6d007d0058257968424bbc3aa6909e9d49557576a520e04a5ef05f"
    "0e86d24ff43f8eb861eef595228d7032aa360f714e667413926ef4f8b5803b69"
    "e35519e3b23f4373dfac6787066dcb4756b54560e0886e9b962c4ad28dab26ba"
    "d1abc25916b09af286537f684f808aefee73046cb7df0a84fbb5967aca131f4b"
    "1cf389799403a30c02d29cbdadb72512db9cec2e5e1d00e50cafcf6f21091ebc"
    "4f253c5eab01a679baeabeedb9c9618f66006b8244d6622aaa56887ccfc66a0f"
    "3851dfa13a78cff7991e03cb2c3a0ed87d7367362eb7805b00b2524ff298a4da"
    "487cacdeaf8a2336c5631b3efa935bb411e753ca13b015fec7e4a730f1369f9e"
    "14000020ea6ee176dccc4af1859e9e4e93f797eac9a78ce439301e35275ad43f"
    "3cddbde316"
);

pub const CERTIFICATE: [u8; 805] = hex!(
    "3082032130820209a0030201020208155a92adc2048f90300d06092a864886f7"
    "0d01010b05003022310b300906035504061302555331133011060355040a130a"
    "4578616d706c65204341301e170d3138313030353031333831375a170d313931"
    "3030353031333831375a302b310b3009060355040613025553311c301a060355"
    "040313136578616d706c652e756c666865696d2e6e657430820122300d06092a"
    "864886f70d01010105000382010f003082010a0282010100c4803606bae7476b"
    "089404eca7b691043ff792bc19eefb7d74d7a80d001e7b4b3a4ae60fe8c071fc"
    "73e7024c0dbcf4bdd11d396bba70464a13e94af83df3e10959547bc955fb412d"
    "a3765211e1f3dc776caa53376eca3aecbec3aab73b31d56cb6529c8098bcc9e0"
    "2818e20bf7f8a03afd1704509ece79bd9f39f1ea69ec47972e830fb5ca95de95"
    "a1e60422d5eebe527954a1e7bf8a86f6466d0d9f16951a4cf7a04692595c1352"
    "f2549e5afb4ebfd77a37950144e4c026874c653e407d7d23074401f484ffd08f"
    "7a1fa05210d1f4f0d5ce79702932e2cabe701fdfad6b4bb71101f44bad666a11"
    "130fe2ee829e4d029dc91cdd6716dbb9061886edc1ba94210203010001a35230"
    "50300e0603551d0f0101ff0404030205a0301d0603551d250416301406082b06"
    "01050507030206082b06010505070301301f0603551d23041830168014894fde"
    "5bcc69e252cf3ea300dfb197b81de1c146300d06092a864886f70d01010b0500"
    "0382010100591645a69a2e3779e4f6dd271aba1c0bfd6cd75599b5e7c36e533e"
    "ff3659084324c9e7a504079d39e0d42987ffe3ebdd09c1cf1d914455870b571d"
    "d19bdf1d24f8bb9a11fe80fd592ba0398cde11e2651e618ce598fa96e5372eef"
    "3d248afde17463ebbfabb8e4d1ab502a54ec0064e92f7819660d3f27cf209e66"
    "7fce5ae2e4ac99c7c93818f8b2510722dfed97f32e3e9349d4c66c9ea6396d74"
    "4462a06b42c6d5ba688eac3a017bddfc8e2cfcad27cb69d3ccdca280414465d3"
    "ae348ce0f34ab2fb9c618371312b191041641c237f11a5d65c844f0404849938"
    "712b959ed685bc5c5dd645ed19909473402926dcb40e3469a15941e8e2cca84b"
    "b6084636a0"
);

/// RSA-PSS-RSAE-SHA256 signature carried in the CertificateVerify.
pub const CERTIFICATE_VERIFY_SIGNATURE: [u8; 256] = hex!(
    "17feb533ca6d007d0058257968424bbc3aa6909e9d49557576a520e04a5ef05f"
    "0e86d24ff43f8eb861eef595228d7032aa360f714e667413926ef4f8b5803b69"
    "e35519e3b23f4373dfac6787066dcb4756b54560e0886e9b962c4ad28dab26ba"
    "d1abc25916b09af286537f684f808aefee73046cb7df0a84fbb5967aca131f4b"
    "1cf389799403a30c02d29cbdadb72512db9cec2e5e1d00e50cafcf6f21091ebc"
    "4f253c5eab01a679baeabeedb9c9618f66006b8244d6622aaa56887ccfc66a0f"
    "3851dfa13a78cff7991e03cb2c3a0ed87d7367362eb7805b00b2524ff298a4da"
    "487cacdeaf8a2336c5631b3efa935bb411e753ca13b015fec7e4a730f1369f9e"
);

pub const SERVER_RANDOM: [u8; 32] = hex!(
    "707172737475767778797a7b7c7d7e7f808182838485868788898a8b8c8d8e8f"
);

pub const SERVER_PRIVATE_KEY: [u8; 32] = hex!(
    "909192939495969798999a9b9c9d9e9fa0a1a2a3a4a5a6a7a8a9aaabacadaeaf"
);
