// This file is part of Nitrogen.
//
// Nitrogen is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Nitrogen is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Nitrogen.  If not, see <http://www.gnu.org/licenses/>.
use thiserror::Error;

pub type Result<T, E = IsaError> = std::result::Result<T, E>;

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum IsaError {
    /// An input, or a value derived from the inputs, is outside the physically valid range.
    #[error("{name} is out of range: {value} ({requirement})")]
    Domain {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },

    /// The CAS and Mach number do not yield equal TAS anywhere in the search bracket.
    #[error("no crossover altitude for {cas} m/s CAS and Mach {mach} between {min} m and {max} m")]
    NoCrossover {
        cas: f64,
        mach: f64,
        min: f64,
        max: f64,
    },

    /// The crossover search ran out of iterations before the bracket closed.
    #[error("crossover altitude did not converge after {iterations} iterations (bracket {width} m)")]
    Convergence { iterations: usize, width: f64 },
}

impl IsaError {
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Self::Domain { .. } | Self::NoCrossover { .. })
    }
}

pub(crate) fn ensure(
    valid: bool,
    name: &'static str,
    value: f64,
    requirement: &'static str,
) -> Result<()> {
    if valid {
        Ok(())
    } else {
        Err(IsaError::Domain {
            name,
            value,
            requirement,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ensure() {
        assert!(ensure(true, "pressure", 1.0, "must be positive").is_ok());
        let err = ensure(false, "pressure", -1.0, "must be positive").unwrap_err();
        assert!(err.is_domain_error());
        assert_eq!(err.to_string(), "pressure is out of range: -1 (must be positive)");
    }

    #[test]
    fn test_convergence_is_not_a_domain_error() {
        let err = IsaError::Convergence {
            iterations: 100,
            width: 1.0,
        };
        assert!(!err.is_domain_error());
    }
}
