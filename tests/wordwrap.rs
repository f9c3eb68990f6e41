// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use logmail::wrap::wordwrap;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn random_text(rng: &mut StdRng) -> String {
    let words = rng.random_range(1..40);
    (0..words)
        .map(|_| {
            let len = rng.random_range(1..=90);
            (0..len)
                .map(|_| rng.random_range(b'a'..=b'z') as char)
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn test_random_text_wraps_only_at_spaces() {
    let mut rng = StdRng::seed_from_u64(0x6c6f_676d_6169_6c);

    for _ in 0..500 {
        let width = rng.random_range(1..=100);
        let text = random_text(&mut rng);
        let wrapped = wordwrap(&text, width);

        // only spaces are replaced
        assert_eq!(wrapped.replace('\n', " "), text);

        for line in wrapped.split('\n') {
            let chars = line.chars().count();
            assert!(
                chars <= width || !line.contains(' '),
                "width {width}, line of {chars} characters could have been broken: {line:?}"
            );
            assert!(!line.is_empty(), "empty line in {wrapped:?}");
        }

        // words are never split
        let original = text.split(' ').collect::<Vec<_>>();
        let wrapped_words = wrapped.split([' ', '\n']).collect::<Vec<_>>();
        assert_eq!(original, wrapped_words);
    }
}
