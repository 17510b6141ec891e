//! Quiz question bank
//!
//! The pool is static. [`QUESTIONS`] is checked at compile time: it must be
//! non-empty and every question's correct index must point at an option.

use crate::GameRng;

/// Question topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    SoftwareConstruction,
    ProductManagement,
}

impl Topic {
    pub fn label(self) -> &'static str {
        match self {
            Topic::SoftwareConstruction => "Software Construction",
            Topic::ProductManagement => "Product Management",
        }
    }
}

/// One multiple-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize, // Index into `options`
    pub topic: Topic,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }

    pub fn correct_answer(&self) -> &'static str {
        self.options[self.correct]
    }
}

pub const QUESTIONS: &[Question] = &[
    Question {
        prompt: "Which of the following is NOT typically included in coding standards?",
        options: &[
            "Naming conventions",
            "Hardware specifications",
            "Commenting guidelines",
            "Indentation rules",
        ],
        correct: 1,
        topic: Topic::SoftwareConstruction,
    },
    Question {
        prompt: "Which programming practice helps in reducing code duplication?",
        options: &[
            "Copy-pasting code",
            "Function abstraction",
            "Using more global variables",
            "Inline coding",
        ],
        correct: 1,
        topic: Topic::SoftwareConstruction,
    },
    Question {
        prompt: "Which review technique involves a group of developers examining code line by line?",
        options: &[
            "Walkthroughs",
            "Unit testing",
            "Code inspections",
            "Alpha testing",
        ],
        correct: 2,
        topic: Topic::SoftwareConstruction,
    },
    Question {
        prompt: "What is a 'desk check' in software development?",
        options: &[
            "A physical inspection of the developer's desk",
            "Manual review of code by the developer themselves",
            "Evaluation of ergonomics in the workspace",
            "Hardware verification process",
        ],
        correct: 1,
        topic: Topic::SoftwareConstruction,
    },
    Question {
        prompt: "What type of testing focuses on testing individual components in isolation?",
        options: &[
            "Integration testing",
            "System testing",
            "Unit testing",
            "Acceptance testing",
        ],
        correct: 2,
        topic: Topic::SoftwareConstruction,
    },
    Question {
        prompt: "In black-box testing, what is the tester primarily concerned with?",
        options: &[
            "Internal code structure",
            "Inputs and outputs",
            "Code coverage metrics",
            "Implementation details",
        ],
        correct: 1,
        topic: Topic::SoftwareConstruction,
    },
    Question {
        prompt: "Which testing approach tests the entire software system as a whole?",
        options: &[
            "Unit testing",
            "Integration testing",
            "Module testing",
            "System testing",
        ],
        correct: 3,
        topic: Topic::SoftwareConstruction,
    },
    Question {
        prompt: "What does RMMM stand for in risk management?",
        options: &[
            "Risk Monitoring and Mitigation Method",
            "Risk Mitigation, Monitoring, and Management",
            "Reactive Management of Major Mistakes",
            "Review, Monitor, Measure, Maintain",
        ],
        correct: 1,
        topic: Topic::ProductManagement,
    },
    Question {
        prompt: "Which approach to risk management attempts to anticipate risks before they occur?",
        options: &[
            "Reactive risk strategy",
            "Proactive risk strategy",
            "Defensive risk strategy",
            "Offensive risk strategy",
        ],
        correct: 1,
        topic: Topic::ProductManagement,
    },
    Question {
        prompt: "What is a key consideration in product release management?",
        options: &[
            "Maximizing the number of features regardless of quality",
            "Balancing features, quality, and time-to-market",
            "Releasing only when all possible features are implemented",
            "Focusing exclusively on marketing aspects",
        ],
        correct: 1,
        topic: Topic::ProductManagement,
    },
    Question {
        prompt: "What is the primary benefit of using a coding framework?",
        options: &[
            "It always makes code run faster",
            "It eliminates the need for testing",
            "It provides reusable structures and standard approaches",
            "It guarantees bug-free code",
        ],
        correct: 2,
        topic: Topic::SoftwareConstruction,
    },
    Question {
        prompt: "What is the main focus of validation testing?",
        options: &[
            "Ensuring the software meets user needs and expectations",
            "Testing individual code units",
            "Verifying the interaction between components",
            "Examining the software's response to invalid inputs",
        ],
        correct: 0,
        topic: Topic::SoftwareConstruction,
    },
    Question {
        prompt: "Which type of maintenance involves modifying software to improve performance without changing functionality?",
        options: &[
            "Corrective maintenance",
            "Adaptive maintenance",
            "Perfective maintenance",
            "Preventive maintenance",
        ],
        correct: 2,
        topic: Topic::ProductManagement,
    },
    Question {
        prompt: "What is software reengineering primarily concerned with?",
        options: &[
            "Creating entirely new software from scratch",
            "Examining and altering existing software to improve it",
            "Testing software in production environments",
            "Marketing existing software to new audiences",
        ],
        correct: 1,
        topic: Topic::ProductManagement,
    },
    Question {
        prompt: "Which of the following is an example of white-box testing?",
        options: &[
            "Testing a function with various inputs to see if it produces expected outputs",
            "Testing a user interface by clicking buttons without knowledge of the code",
            "Testing code paths and branches to ensure all statements are executed",
            "Testing software based only on its requirements document",
        ],
        correct: 2,
        topic: Topic::SoftwareConstruction,
    },
    Question {
        prompt: "What is the primary purpose of code walkthroughs?",
        options: &[
            "To exercise all possible paths through the code",
            "To find and fix defects in the code",
            "To measure code performance metrics",
            "To document the code structure",
        ],
        correct: 1,
        topic: Topic::SoftwareConstruction,
    },
    Question {
        prompt: "In risk identification, what is a 'risk item checklist'?",
        options: &[
            "A list of actual problems that have occurred",
            "A tool that helps identify potential risk factors based on past experiences",
            "A checklist for QA to verify before product release",
            "A document listing all bugs in the software",
        ],
        correct: 1,
        topic: Topic::ProductManagement,
    },
    Question {
        prompt: "What is risk refinement in the context of project management?",
        options: &[
            "Eliminating all risks from a project",
            "Further analyzing risks to understand their characteristics and impacts",
            "Reducing the number of risks to a manageable level",
            "Communicating risks to stakeholders",
        ],
        correct: 1,
        topic: Topic::ProductManagement,
    },
    Question {
        prompt: "What is integration testing primarily concerned with?",
        options: &[
            "Testing individual modules in isolation",
            "Testing the entire system from the user's perspective",
            "Testing interactions between modules or components",
            "Testing the system in the production environment",
        ],
        correct: 2,
        topic: Topic::SoftwareConstruction,
    },
    Question {
        prompt: "Which debugging technique involves adding print statements to track the flow of execution?",
        options: &[
            "Breakpoint debugging",
            "Static analysis",
            "Tracing",
            "Regression testing",
        ],
        correct: 2,
        topic: Topic::SoftwareConstruction,
    },
];

const fn bank_is_valid(bank: &[Question]) -> bool {
    if bank.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < bank.len() {
        let q = &bank[i];
        if q.options.len() < 2 || q.correct >= q.options.len() {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(bank_is_valid(QUESTIONS), "question bank is empty or malformed");

/// Random access to the question pool
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    questions: &'static [Question],
}

impl QuestionBank {
    pub fn new() -> Self {
        Self {
            questions: QUESTIONS,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Uniformly random question from the whole pool
    pub fn pick_random(&self, rng: &mut GameRng) -> &'static Question {
        &self.questions[rng.index(self.questions.len())]
    }

    /// Uniformly random question on `topic`, or `None` if the topic is empty
    pub fn pick_by_topic(&self, topic: Topic, rng: &mut GameRng) -> Option<&'static Question> {
        let matching: Vec<&'static Question> =
            self.questions.iter().filter(|q| q.topic == topic).collect();
        if matching.is_empty() {
            return None;
        }
        Some(matching[rng.index(matching.len())])
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::new()
    }
}
