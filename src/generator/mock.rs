//! Offline story generation from canned templates.
//!
//! Templates are data: an ordered table of keyword sets, first match on the
//! lowercased topic wins, and the generic template covers everything else.

use std::time::Duration;

use crate::story::{ComprehensionQuestion, GeneratedStory, Topic};

type QuestionSpec = (&'static str, [&'static str; 4], usize);

struct ThemedStory {
    title: &'static str,
    content: &'static str,
    questions: [QuestionSpec; 3],
}

const ROBOT_IN_SPACE: ThemedStory = ThemedStory {
    title: "Uzayda Yaşayan Robot Arkadaş",
    content: "Çok uzaklarda, parlak yıldızların arasında küçük bir uzay istasyonunda ROBI adında sevimli bir robot yaşıyordu. ROBI'nin gözleri mavi LED ışıklarla parlıyor, metalik vücudu gümüş renkte parlıyordu.

Bir gün, ROBI uzay istasyonunun penceresinden dışarı bakarak yalnızlığını hissetti. \"Keşke bir arkadaşım olsa\" diye düşündü. O sırada, uzaktan gelen garip bir sinyal aldı.

Sinyal, kayıp bir uzay gemisinden geliyordu. ROBI hemen yardıma koştu ve gemide küçük bir kız olan Luna'yı buldu. Luna da ROBI gibi arkadaş arıyordu.

O günden sonra ROBI ve Luna en iyi arkadaş oldular. Birlikte uzayın derinliklerini keşfediyor, yıldızların hikayelerini dinliyor ve galaksinin her köşesinde maceralar yaşıyorlardı.",
    questions: [
        ("Robotun adı nedir?", ["ROBI", "LUNA", "MAX", "ALEX"], 0),
        ("Hikaye nerede geçiyor?", ["Dünyada", "Uzayda", "Denizde", "Ormanda"], 1),
        (
            "ROBI kimle arkadaş oldu?",
            ["Başka bir robot", "Luna", "Astronot", "Uzaylı"],
            1,
        ),
    ],
};

/// Keyword sets, checked in order against the lowercased topic.
const THEMES: &[(&[&str], ThemedStory)] = &[(&["robot", "uzay", "space"], ROBOT_IN_SPACE)];

const GENERIC_TITLE_SUFFIX: &str = "Hakkında Bir Hikaye";

const GENERIC_QUESTIONS: [QuestionSpec; 3] = [
    (
        "Hikayenin ana teması nedir?",
        ["Macera", "Dostluk ve azim", "Para", "Güç"],
        1,
    ),
    (
        "Kahraman nasıl başarılı oldu?",
        ["Şansla", "Azim ve arkadaşlık", "Parayla", "Güçle"],
        1,
    ),
    (
        "Hikayeden çıkan ders nedir?",
        [
            "Para önemlidir",
            "Pes etmemek gerekir",
            "Güç herşeydir",
            "Yalnızlık iyidir",
        ],
        1,
    ),
];

/// Produces stories without touching the network, after an artificial
/// delay that imitates provider latency.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    delay: Duration,
}

impl MockGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn generate(&self, topic: &Topic) -> GeneratedStory {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        compose(topic)
    }
}

/// The story the mock generator returns for `topic`. Pure and deterministic.
pub fn compose(topic: &Topic) -> GeneratedStory {
    let lowered = topic.as_str().to_lowercase();
    let theme = THEMES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)));

    match theme {
        Some((_, themed)) => GeneratedStory {
            title: themed.title.to_string(),
            content: themed.content.to_string(),
            questions: questions(&themed.questions),
        },
        None => generic(topic),
    }
}

fn generic(topic: &Topic) -> GeneratedStory {
    let topic = topic.as_str();
    let content = format!(
        "Bu {topic} hakkında güzel bir hikayedir. Kahraman, zorluklarla karşılaştı ama cesaretle üstesinden geldi.

Maceranın başında her şey zordu, ama kahraman pes etmedi. Arkadaşlarının yardımıyla ve kendi azmiyle adım adım ileredi.

En sonunda büyük bir başarı elde etti. Bu deneyim ona önemli bir şey öğretti: Azim ve dostluk her zorlukta yardımcı olur.

Bu macera onu daha güçlü ve bilge bir kişi yaptı."
    );
    GeneratedStory {
        title: format!("{} {}", title_case(topic), GENERIC_TITLE_SUFFIX),
        content,
        questions: questions(&GENERIC_QUESTIONS),
    }
}

fn questions(specs: &[QuestionSpec]) -> Vec<ComprehensionQuestion> {
    specs
        .iter()
        .map(|(question, options, correct)| {
            ComprehensionQuestion::new(question, *options, *correct)
        })
        .collect()
}

/// Uppercase the first letter of every word and lowercase the rest.
/// A word is a run of alphabetic characters.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
