//! Singapore Method Stage Session
//!
//! Drives one learner through the Concrete-Pictorial-Abstract progression
//! for a fixed set of example problems. Pure state, no signals: the page
//! component wraps a [`StageSession`] in an `RwSignal`.

/// One stage of the CPA progression. Ordered, not cyclic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Concrete,
    Pictorial,
    Abstract,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Concrete, Stage::Pictorial, Stage::Abstract];

    fn index(&self) -> usize {
        match self {
            Stage::Concrete => 0,
            Stage::Pictorial => 1,
            Stage::Abstract => 2,
        }
    }

    /// Static content for this stage's example problem
    pub fn content(&self) -> &'static StageContent {
        &STAGE_CONTENT[self.index()]
    }
}

/// Fixed example problem owned by a stage
pub struct StageContent {
    pub title: &'static str,
    pub description: &'static str,
    pub problem: &'static str,
    pub solution: &'static str,
    pub answer: &'static str,
}

const STAGE_CONTENT: [StageContent; 3] = [
    StageContent {
        title: "Concreto",
        description: "Manipule objetos físicos para entender o conceito",
        problem: "Maria tem 8 maçãs. Ela deu 3 maçãs para João. Quantas maçãs Maria tem agora?",
        solution: "Use os blocos abaixo para representar as maçãs e resolver o problema.",
        answer: "5 maçãs",
    },
    StageContent {
        title: "Pictórico",
        description: "Represente visualmente usando desenhos e diagramas",
        problem: "Em uma escola há 24 alunos. Se 1/3 dos alunos são meninas, quantas meninas há na escola?",
        solution: "Use o modelo de barras para visualizar e resolver.",
        answer: "8 meninas",
    },
    StageContent {
        title: "Abstrato",
        description: "Use símbolos matemáticos e equações",
        problem: "Resolva: 3x + 7 = 22",
        solution: "Use operações algébricas para encontrar o valor de x.",
        answer: "x = 5",
    },
];

/// Ephemeral per-visit session over the stage navigator.
///
/// The learner may jump between stages in any order; entering a stage
/// always starts it fresh. The concrete stage requires an interaction
/// with the manipulatives before its answer can be revealed.
#[derive(Clone, Debug)]
pub struct StageSession {
    current: Stage,
    answer_revealed: [bool; 3],
    solved: bool,
}

impl Default for StageSession {
    fn default() -> Self {
        Self {
            current: Stage::Concrete,
            answer_revealed: [false; 3],
            solved: false,
        }
    }
}

impl StageSession {
    pub fn current(&self) -> Stage {
        self.current
    }

    pub fn answer_revealed(&self) -> bool {
        self.answer_revealed[self.current.index()]
    }

    /// Whether the concrete manipulatives were touched
    pub fn solved(&self) -> bool {
        self.solved
    }

    /// Switch to a stage, starting it fresh. Flags never carry over.
    pub fn select_stage(&mut self, stage: Stage) {
        self.current = stage;
        self.answer_revealed[stage.index()] = false;
        self.solved = false;
    }

    /// Record the first manipulative click in the concrete stage
    pub fn mark_interaction(&mut self) {
        if self.current == Stage::Concrete {
            self.solved = true;
        }
    }

    /// Whether the reveal-answer control is available right now
    pub fn can_reveal(&self) -> bool {
        match self.current {
            Stage::Concrete => self.solved,
            _ => true,
        }
    }

    /// Reveal the current stage's answer. Idempotent; stays revealed
    /// until `reset`. Refused in the concrete stage before interaction.
    pub fn reveal_answer(&mut self) {
        if self.can_reveal() {
            self.answer_revealed[self.current.index()] = true;
        }
    }

    /// Clear the current stage only
    pub fn reset(&mut self) {
        self.answer_revealed[self.current.index()] = false;
        self.solved = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_concrete() {
        let session = StageSession::default();
        assert_eq!(session.current(), Stage::Concrete);
        assert!(!session.answer_revealed());
        assert!(!session.solved());
    }

    #[test]
    fn test_concrete_requires_interaction_before_reveal() {
        let mut session = StageSession::default();
        session.reveal_answer();
        assert!(!session.answer_revealed());

        session.mark_interaction();
        assert!(session.solved());
        session.reveal_answer();
        assert!(session.answer_revealed());
        assert_eq!(session.current().content().answer, "5 maçãs");
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let mut session = StageSession::default();
        session.select_stage(Stage::Pictorial);
        session.reveal_answer();
        session.reveal_answer();
        assert!(session.answer_revealed());
    }

    #[test]
    fn test_reset_then_reveal_all_stages() {
        for stage in Stage::ALL {
            let mut session = StageSession::default();
            session.select_stage(stage);
            session.mark_interaction();
            session.reveal_answer();
            session.reset();
            assert!(!session.answer_revealed());
            assert!(!session.solved());

            session.mark_interaction();
            session.reveal_answer();
            assert!(session.answer_revealed());
            assert_eq!(stage.content().answer, session.current().content().answer);
        }
    }

    #[test]
    fn test_switching_stages_never_carries_flags() {
        let mut session = StageSession::default();
        session.mark_interaction();
        session.reveal_answer();

        session.select_stage(Stage::Abstract);
        assert!(!session.answer_revealed());
        assert!(!session.solved());

        // Jumping back also starts fresh
        session.select_stage(Stage::Concrete);
        assert!(!session.answer_revealed());
        assert!(!session.solved());
    }

    #[test]
    fn test_mark_interaction_only_in_concrete() {
        let mut session = StageSession::default();
        session.select_stage(Stage::Abstract);
        session.mark_interaction();
        assert!(!session.solved());
        // Non-concrete stages can reveal without interaction
        assert!(session.can_reveal());
    }

    #[test]
    fn test_stage_answers() {
        assert_eq!(Stage::Concrete.content().answer, "5 maçãs");
        assert_eq!(Stage::Pictorial.content().answer, "8 meninas");
        assert_eq!(Stage::Abstract.content().answer, "x = 5");
    }
}
