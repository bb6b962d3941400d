// ============================================================================
// VALIDATION - Reglas de formulario (puras, antes de cualquier llamada de red)
// ============================================================================
// Gana la primera regla que falla, en el orden en que aparecen aquí.
// ============================================================================

use crate::errors::{Field, ValidationError};
use crate::models::{Credential, RegisterData};

pub const MIN_NAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

const MSG_REQUIRED: &str = "Por favor, preencha todos os campos";
const MSG_EMAIL: &str = "Por favor, insira um email válido";
const MSG_NAME_LEN: &str = "O nome deve ter pelo menos 3 caracteres";
const MSG_PASSWORD_LEN: &str = "A senha deve ter pelo menos 6 caracteres";
const MSG_MISMATCH: &str = "As senhas não coincidem";

fn required(value: &str, field: Field) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, MSG_REQUIRED));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    required(email, Field::Email)?;
    if !email.contains('@') {
        return Err(ValidationError::new(Field::Email, MSG_EMAIL));
    }
    Ok(())
}

/// Contraseña nueva + confirmación (registro y reset)
pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    required(password, Field::Password)?;
    required(confirmation, Field::ConfirmPassword)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::new(Field::Password, MSG_PASSWORD_LEN));
    }
    if password != confirmation {
        return Err(ValidationError::new(Field::ConfirmPassword, MSG_MISMATCH));
    }
    Ok(())
}

pub fn validate_login(credential: &Credential) -> Result<(), ValidationError> {
    required(&credential.email, Field::Email)?;
    required(&credential.password, Field::Password)?;
    validate_email(&credential.email)
}

pub fn validate_register(data: &RegisterData) -> Result<(), ValidationError> {
    required(&data.name, Field::Name)?;
    required(&data.email, Field::Email)?;
    required(&data.password, Field::Password)?;
    required(&data.confirm_password, Field::ConfirmPassword)?;

    if data.name.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::new(Field::Name, MSG_NAME_LEN));
    }
    validate_email(&data.email)?;
    validate_new_password(&data.password, &data.confirm_password)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(name: &str, email: &str, password: &str, confirm: &str) -> RegisterData {
        RegisterData {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn login_requires_both_fields() {
        let err = validate_login(&Credential::new("", "x")).unwrap_err();
        assert_eq!(err.field, Field::Email);
        assert_eq!(err.reason, MSG_REQUIRED);

        let err = validate_login(&Credential::new("a@x.com", "")).unwrap_err();
        assert_eq!(err.field, Field::Password);
    }

    #[test]
    fn login_rejects_email_without_at_sign() {
        let err = validate_login(&Credential::new("no-at-sign", "x")).unwrap_err();
        assert_eq!(err.field, Field::Email);
        assert_eq!(err.reason, MSG_EMAIL);
    }

    #[test]
    fn login_accepts_short_passwords() {
        assert!(validate_login(&Credential::new("a@x.com", "x")).is_ok());
    }

    #[test]
    fn missing_fields_win_over_everything() {
        let err = validate_register(&register("ab", "bad", "1", "")).unwrap_err();
        assert_eq!(err.reason, MSG_REQUIRED);
        assert_eq!(err.field, Field::ConfirmPassword);
    }

    #[test]
    fn short_name_fails_before_email_and_password() {
        let err = validate_register(&register("ab", "bad", "1", "2")).unwrap_err();
        assert_eq!(err.field, Field::Name);
        assert_eq!(err.reason, MSG_NAME_LEN);
    }

    #[test]
    fn rule_order_after_name() {
        let err = validate_register(&register("Ana", "bad", "1", "2")).unwrap_err();
        assert_eq!(err.field, Field::Email);

        let err = validate_register(&register("Ana", "ana@x.com", "12345", "54321")).unwrap_err();
        assert_eq!(err.field, Field::Password);
        assert_eq!(err.reason, MSG_PASSWORD_LEN);

        let err = validate_register(&register("Ana", "ana@x.com", "123456", "654321")).unwrap_err();
        assert_eq!(err.field, Field::ConfirmPassword);
        assert_eq!(err.reason, MSG_MISMATCH);
    }

    #[test]
    fn lengths_count_characters() {
        // 3 caracteres, 6 bytes
        assert!(validate_register(&register("Zoë", "z@x.com", "çãéíóú", "çãéíóú")).is_ok());
        assert!(validate_register(&register("Zë", "z@x.com", "123456", "123456")).is_err());
    }

    #[test]
    fn valid_registration_passes() {
        assert!(validate_register(&register("Maria", "maria@x.com", "segredo", "segredo")).is_ok());
    }
}
