// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Hash related utils.

use hmac::Hmac;
use hmac::Mac;
use sha2::Digest;
use sha2::Sha256;

/// Hex encoded SHA256 hash of the empty payload.
pub const EMPTY_STRING_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Hex encoded SHA256 hash, the SigV4 payload hash.
pub fn hex_sha256(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content))
}

/// HMAC with SHA256 hash, used to derive the signing key.
pub fn hmac_sha256(key: &[u8], content: &[u8]) -> Vec<u8> {
    mac(key, content).as_ref().to_vec()
}

/// Hex encoded HMAC with SHA256 hash, the final signature.
pub fn hex_hmac_sha256(key: &[u8], content: &[u8]) -> String {
    hex::encode(mac(key, content))
}

fn mac(key: &[u8], content: &[u8]) -> impl AsRef<[u8]> {
    // SAFETY: HMAC accepts keys of any length, new_from_slice never fails.
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    h.update(content);
    h.finalize().into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_sha256() {
        assert_eq!(hex_sha256(b""), EMPTY_STRING_SHA256);
        assert_eq!(
            hex_sha256(br#"{"key":"value"}"#),
            "e43abcf3375244839c012f9633f95862d232a95b00d5bc7348b3098b9fed7f32"
        );
    }

    #[test]
    fn test_hmac_sha256() {
        // RFC 4231 test case 2.
        assert_eq!(
            hex_hmac_sha256(b"Jefe", b"what do ya want for nothing?"),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
        assert_eq!(
            hex::encode(hmac_sha256(b"Jefe", b"what do ya want for nothing?")),
            hex_hmac_sha256(b"Jefe", b"what do ya want for nothing?")
        );
    }
}
