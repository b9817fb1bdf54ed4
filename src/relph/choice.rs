use crate::*;

/// How the most recent RELPH move was chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum Choice {
    Idle,
    /// Empty window, so no hypothesis exists to consult.
    Unfounded,
    /// Q-value selection failed; played uniformly instead.
    Fault(String),
    Weighted {
        q: [Utility; 3],
        policy: [Probability; 3],
        matching: usize,
        chosen: Move,
    },
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "No decision yet"),
            Self::Unfounded => write!(f, "No hypotheses yet, playing randomly"),
            Self::Fault(reason) => write!(f, "Selection failed ({}), playing randomly", reason),
            Self::Weighted {
                q,
                policy,
                matching,
                chosen,
            } => {
                write!(f, "{} matching hypotheses give Q", matching)?;
                for m in Move::ALL {
                    write!(f, " {} {:+.2}", m, q[m.index()])?;
                }
                write!(
                    f,
                    "; sampled {} at {:.0}%",
                    chosen,
                    policy[chosen.index()] * 100.
                )
            }
        }
    }
}
