//! Static course content: steps, questions and file examples.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Step {
    pub id: usize,
    pub title: &'static str,
}

pub const STEPS: [Step; 5] = [
    Step { id: 1, title: "Introduction aux bits" },
    Step { id: 2, title: "Manipulation des bits" },
    Step { id: 3, title: "Les octets" },
    Step { id: 4, title: "Exemples pratiques" },
    Step { id: 5, title: "Questionnaire" },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntroQuestion {
    pub text: &'static str,
    pub answer: &'static str,
    pub hint: Option<&'static str>,
}

pub const INTRO_QUESTIONS: [IntroQuestion; 3] = [
    IntroQuestion {
        text: "Quelle est la valeur d'un bit quand il est allumé ?",
        answer: "1",
        hint: None,
    },
    IntroQuestion {
        text: "Quelle est la valeur d'un bit quand il est éteint ?",
        answer: "0",
        hint: None,
    },
    IntroQuestion {
        text: "Combien de valeurs différentes peut prendre un bit ?",
        answer: "2",
        hint: Some("Pensez aux états possibles : allumé ou éteint"),
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub text: &'static str,
    pub options: &'static [&'static str],
    pub correct_answers: &'static [usize],
    pub explanation: &'static str,
}

pub static QUIZ_QUESTIONS: [QuizQuestion; 6] = [
    QuizQuestion {
        text: "Est-il possible d'envoyer une série de photos d'un poids total de 42 Mo en pièce jointe d'un e-mail ?",
        options: &["Oui, c'est possible", "Non, la limite est de 25 Mo"],
        correct_answers: &[1],
        explanation: "La limite standard pour les pièces jointes d'e-mail est de 25 Mo. Pour 42 Mo, il faudra utiliser une alternative.",
    },
    QuizQuestion {
        text: "Quelles alternatives avez-vous pour partager des fichiers volumineux ?",
        options: &[
            "Services de stockage cloud (Google Drive, Dropbox)",
            "Sites de transfert temporaire (WeTransfer)",
            "Compression des fichiers (ZIP, RAR)",
            "Toutes les réponses ci-dessus",
        ],
        correct_answers: &[3],
        explanation: "Toutes ces solutions sont valables pour partager des fichiers volumineux. Le choix dépendra de vos besoins spécifiques.",
    },
    QuizQuestion {
        text: "Combien de Mo représente 1 Go ?",
        options: &["100 Mo", "1000 Mo", "1024 Mo", "1200 Mo"],
        correct_answers: &[2],
        explanation: "1 Go = 1024 Mo (2^10 Mo). Cette valeur est basée sur le système binaire utilisé en informatique.",
    },
    QuizQuestion {
        text: "Quelle est la taille maximale recommandée pour une pièce jointe d'e-mail ?",
        options: &["10 Mo", "25 Mo", "50 Mo", "100 Mo"],
        correct_answers: &[1],
        explanation: "La limite standard est généralement de 25 Mo pour les pièces jointes d'e-mail.",
    },
    QuizQuestion {
        text: "Quel support de stockage est le plus adapté pour une sauvegarde de 1 To ?",
        options: &[
            "Une clé USB standard",
            "Un CD-ROM",
            "Un disque dur ou SSD de grande capacité",
            "Une carte SD",
        ],
        correct_answers: &[2],
        explanation: "Pour une sauvegarde de 1 To, un disque dur ou SSD de grande capacité est nécessaire.",
    },
    QuizQuestion {
        text: "Quelle est la meilleure pratique pour partager plusieurs fichiers volumineux ?",
        options: &[
            "Les envoyer en plusieurs e-mails séparés",
            "Utiliser un service de partage de fichiers",
            "Les compresser au maximum",
            "Réduire leur qualité",
        ],
        correct_answers: &[1],
        explanation: "Utiliser un service de partage de fichiers (cloud, WeTransfer) est la solution la plus pratique et fiable.",
    },
];

/// Symbolic icon reference; renderers decide how to draw it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    FileText,
    Image,
    Music,
    Video,
    Film,
    Database,
    HardDrive,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::FileText => "📄",
            Icon::Image => "🖼",
            Icon::Music => "🎵",
            Icon::Video => "📹",
            Icon::Film => "🎬",
            Icon::Database => "🎮",
            Icon::HardDrive => "💾",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileExample {
    pub name: &'static str,
    pub icon: Icon,
    pub size_bytes: u64,
    pub description: &'static str,
}

pub static FILE_EXAMPLES: [FileExample; 7] = [
    FileExample {
        name: "Document texte",
        icon: Icon::FileText,
        size_bytes: 12_500,
        description: "Un document texte de 5 pages (~12 Ko)",
    },
    FileExample {
        name: "Photo numérique",
        icon: Icon::Image,
        size_bytes: 3_145_728,
        description: "Une photo haute résolution (~3 Mo)",
    },
    FileExample {
        name: "Album musical",
        icon: Icon::Music,
        size_bytes: 104_857_600,
        description: "Un album de 12 chansons en haute qualité (~100 Mo)",
    },
    FileExample {
        name: "Film HD",
        icon: Icon::Video,
        size_bytes: 4_294_967_296,
        description: "Un film de 2h en HD (~4 Go)",
    },
    FileExample {
        name: "Série complète",
        icon: Icon::Film,
        size_bytes: 42_949_672_960,
        description: "Une saison complète en 4K (~40 Go)",
    },
    FileExample {
        name: "Jeu vidéo moderne",
        icon: Icon::Database,
        size_bytes: 107_374_182_400,
        description: "Un jeu AAA avec graphismes haute qualité (~100 Go)",
    },
    FileExample {
        name: "Backup système",
        icon: Icon::HardDrive,
        size_bytes: 1_099_511_627_776,
        description: "Sauvegarde complète d'un ordinateur (~1 To)",
    },
];

pub const HELP_TEXT: &str = "Cette application vous guide à travers les concepts fondamentaux du stockage numérique. \
Suivez chaque étape et complétez les exercices pour progresser. \
Vous pouvez toujours recommencer si nécessaire (F5).";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_ids_are_sequential() {
        for (i, step) in STEPS.iter().enumerate() {
            assert_eq!(step.id, i + 1);
        }
    }

    #[test]
    fn test_quiz_answers_point_at_options() {
        for q in &QUIZ_QUESTIONS {
            assert!(!q.correct_answers.is_empty());
            assert!(q.correct_answers.iter().all(|i| *i < q.options.len()));
        }
    }

    #[test]
    fn test_file_examples_are_ordered_by_size() {
        assert_eq!(FILE_EXAMPLES.len(), 7);
        assert!(FILE_EXAMPLES.windows(2).all(|w| w[0].size_bytes < w[1].size_bytes));
    }
}
