//! Reading constant arguments off call sites by parameter name.
//!
//! Annotation applications are constructor calls whose arguments are constants. These accessors map a formal
//! parameter name to its argument slot (via [`ParameterLookup`]) and reify the argument found there.

use super::{ConstantReifier, ConstantValue, ReifyError};
use crate::descriptors::ParameterLookup;
use crate::ir::{IrCall, IrExpr};
use irconst_core::ConstKind;

/// Every formal parameter of a callee paired with its reified argument, in parameter order.
///
/// A parameter with no supplied argument maps to `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueArguments(Vec<(String, Option<ConstantValue>)>);

impl ValueArguments {
    /// The value supplied for `name`. `None` if there is no such parameter or its slot is empty.
    pub fn get(&self, name: &str) -> Option<&ConstantValue> {
        self.slot(name).flatten()
    }

    /// `Some(slot)` if the callee has a parameter called `name`.
    pub fn slot(&self, name: &str) -> Option<Option<&ConstantValue>> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ConstantValue>)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The argument expression bound to the parameter called `name`, if both exist.
fn argument_for<'c>(call: &'c IrCall, name: &str, params: &impl ParameterLookup) -> Option<&'c IrExpr> {
    let formals = params.formal_parameters_of(call.target.callee())?;
    let param = formals.iter().find(|p| p.name == name)?;
    call.value_argument(param.index)
}

impl ConstantReifier {
    /// Reify the argument passed for parameter `name`.
    ///
    /// `Ok(None)` when the callee has no such parameter (or is unknown to `params`) or when no argument was
    /// supplied for it. Only the requested argument is reified.
    pub fn named_constant_argument(
        &self,
        call: &IrCall,
        name: &str,
        params: &impl ParameterLookup,
    ) -> Result<Option<ConstantValue>, ReifyError> {
        argument_for(call, name, params).map(|arg| self.reify(arg)).transpose()
    }

    /// Like [`Self::named_constant_argument`], for call sites where the argument is known to be present.
    pub fn require_named_constant_argument(
        &self,
        call: &IrCall,
        name: &str,
        params: &impl ParameterLookup,
    ) -> Result<ConstantValue, ReifyError> {
        self.named_constant_argument(call, name, params)?.ok_or_else(|| {
            tracing::debug!(parameter = name, callee = %call.target.callee(), "required argument missing");
            ReifyError::MissingRequiredArgument {
                parameter: name.to_string(),
            }
        })
    }

    /// Reify every argument of `call`, keyed by formal parameter name.
    ///
    /// Fails on the first supplied argument that is not constant. A callee unknown to `params` yields an empty
    /// set.
    #[tracing::instrument(skip_all, fields(callee = %call.target.callee(), arg_count = call.args.len()))]
    pub fn all_value_arguments(
        &self,
        call: &IrCall,
        params: &impl ParameterLookup,
    ) -> Result<ValueArguments, ReifyError> {
        let Some(formals) = params.formal_parameters_of(call.target.callee()) else {
            tracing::debug!("callee has no known parameter list");
            return Ok(ValueArguments::default());
        };

        formals
            .iter()
            .map(|param| {
                let value = call
                    .value_argument(param.index)
                    .map(|arg| self.reify(arg))
                    .transpose()?;
                Ok::<_, ReifyError>((param.name.clone(), value))
            })
            .collect::<Result<Vec<_>, ReifyError>>()
            .map(ValueArguments)
    }

    /// The argument for `name` if it reifies to a string; `None` otherwise.
    pub fn string_argument(
        &self,
        call: &IrCall,
        name: &str,
        params: &impl ParameterLookup,
    ) -> Result<Option<String>, ReifyError> {
        Ok(match self.named_constant_argument(call, name, params)? {
            Some(ConstantValue::String(s)) => Some(s),
            _ => None,
        })
    }

    /// The string argument for `name`, which must be present and must be a string.
    pub fn require_string_argument(
        &self,
        call: &IrCall,
        name: &str,
        params: &impl ParameterLookup,
    ) -> Result<String, ReifyError> {
        match self.require_named_constant_argument(call, name, params)? {
            ConstantValue::String(s) => Ok(s),
            other => Err(ReifyError::UnexpectedArgumentKind {
                parameter: name.to_string(),
                expected: ConstKind::String,
                found: other.type_name(),
            }),
        }
    }
}
