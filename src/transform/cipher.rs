//! # 重复密钥加法密码
//!
//! 对每个字节循环加上（或减去）密钥字节，模 256，覆盖完整的字节取值范围。
//!
//! 该变换没有扩散也没有密钥扩展，只保证可逆性，不能作为安全的加密手段。
//!
//! ## 依赖关系
//! - 被 `transform/pipeline.rs` 使用

/// 变换方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// 对整个缓冲区执行变换
///
/// 密钥为空时原样返回输入。
pub fn transform(data: &[u8], key: &[u8], direction: Direction) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }

    data.iter()
        .zip(key.iter().cycle())
        .map(|(&byte, &k)| match direction {
            Direction::Encrypt => byte.wrapping_add(k),
            Direction::Decrypt => byte.wrapping_sub(k),
        })
        .collect()
}

/// 加密
pub fn encrypt(data: &[u8], key: &[u8]) -> Vec<u8> {
    transform(data, key, Direction::Encrypt)
}

/// 解密
pub fn decrypt(data: &[u8], key: &[u8]) -> Vec<u8> {
    transform(data, key, Direction::Decrypt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_values() {
        assert_eq!(encrypt(&[1, 2, 3, 4], &[10, 20]), vec![11, 22, 13, 24]);
        assert_eq!(decrypt(&[11, 22, 13, 24], &[10, 20]), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_wraps_around_byte_range() {
        assert_eq!(encrypt(&[250, 0], &[10]), vec![4, 10]);
        assert_eq!(decrypt(&[4, 10], &[10]), vec![250, 0]);
        assert_eq!(decrypt(&[0], &[255]), vec![1]);
    }

    #[test]
    fn test_empty_key_is_identity() {
        let data = b"unchanged".to_vec();
        assert_eq!(encrypt(&data, b""), data);
        assert_eq!(decrypt(&data, b""), data);
    }

    #[test]
    fn test_empty_data() {
        assert!(encrypt(&[], b"key").is_empty());
    }

    proptest! {
        #[test]
        fn prop_decrypt_inverts_encrypt(
            data in proptest::collection::vec(any::<u8>(), 0..1024),
            key in proptest::collection::vec(any::<u8>(), 1..32),
        ) {
            let encrypted = encrypt(&data, &key);
            prop_assert_eq!(encrypted.len(), data.len());
            prop_assert_eq!(decrypt(&encrypted, &key), data);
        }
    }
}
