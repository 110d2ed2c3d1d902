//! Static derivation text: the model equations and the integrating-factor steps.
//!
//! Formulas are plain-text math so every surface (terminal, egui label) can
//! show them without a typesetting engine.

/// One captioned formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivationStep {
    pub caption: &'static str,
    pub formula: &'static str,
}

/// Model summary shown beside the chart.
pub const MODEL_EQUATIONS: [DerivationStep; 5] = [
    DerivationStep {
        caption: "Differential equation (Kirchhoff's voltage law)",
        formula: "R dq/dt + q/C = E0",
    },
    DerivationStep {
        caption: "Charge solution with initial condition q(0) = 0",
        formula: "q(t) = E0 C (1 - e^(-t/(RC)))",
    },
    DerivationStep {
        caption: "Time constant",
        formula: "τ = RC",
    },
    DerivationStep {
        caption: "Maximum charge",
        formula: "q_max = E0 C",
    },
    DerivationStep {
        caption: "Final capacitor voltage",
        formula: "Vc(∞) = E0",
    },
];

/// Solving the charging ODE with the integrating factor, step by step.
pub const INTEGRATING_FACTOR_STEPS: [DerivationStep; 8] = [
    DerivationStep {
        caption: "Step 1. Write the equation in standard form:",
        formula: "dq/dt + (1/(RC)) q = E0/R",
    },
    DerivationStep {
        caption: "Step 2. Identify P(t) and f(t), then compute the integrating factor:",
        formula: "P(t) = 1/(RC),  f(t) = E0/R,  μ(t) = e^(∫P(t) dt) = e^(t/(RC))",
    },
    DerivationStep {
        caption: "Step 3. Multiply the ODE by the integrating factor:",
        formula: "e^(t/(RC)) dq/dt + (1/(RC)) e^(t/(RC)) q = (E0/R) e^(t/(RC))",
    },
    DerivationStep {
        caption: "Step 4. Recognise the left side as the derivative of a product:",
        formula: "d/dt (e^(t/(RC)) q) = (E0/R) e^(t/(RC))",
    },
    DerivationStep {
        caption: "Step 5. Integrate both sides:",
        formula: "e^(t/(RC)) q(t) = ∫ (E0/R) e^(t/(RC)) dt + C1",
    },
    DerivationStep {
        caption: "Step 6. Evaluate the integral and solve for q(t):",
        formula: "q(t) = E0 C + C1 e^(-t/(RC))",
    },
    DerivationStep {
        caption: "Step 7. Apply the initial condition q(0) = 0:",
        formula: "0 = E0 C + C1  =>  C1 = -E0 C",
    },
    DerivationStep {
        caption: "Step 8. Substitute C1 to obtain the particular solution:",
        formula: "q(t) = E0 C (1 - e^(-t/(RC)))",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_numbered_in_order() {
        for (i, step) in INTEGRATING_FACTOR_STEPS.iter().enumerate() {
            assert!(step.caption.starts_with(&format!("Step {}.", i + 1)));
            assert!(!step.formula.is_empty());
        }
    }

    #[test]
    fn final_step_matches_model_solution() {
        assert_eq!(
            INTEGRATING_FACTOR_STEPS[7].formula,
            MODEL_EQUATIONS[1].formula
        );
    }
}
