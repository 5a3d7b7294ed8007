/// Stylesheet appended to `<head>` at start: keyframes and the classes the
/// scripted behaviors toggle.
pub const INJECTED_STYLES: &str = r#"
@keyframes slideInRight {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}

@keyframes slideOutRight {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}

.share-options {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 1rem;
}

.share-option-btn {
    background: rgba(255, 255, 255, 0.1);
    border: 1px solid rgba(255, 255, 255, 0.2);
    color: var(--luxury-white);
    padding: 1rem;
    border-radius: 10px;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
    transition: all 0.3s ease;
    cursor: pointer;
}

.share-option-btn:hover {
    background: var(--option-color);
    border-color: var(--option-color);
    color: white;
    transform: translateY(-2px);
}

.share-option-btn i { font-size: 1.5rem; }
.share-option-btn span { font-size: 0.9rem; font-weight: 600; }

.notification-content {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.notification-close {
    background: none;
    border: none;
    color: var(--luxury-white);
    cursor: pointer;
    padding: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    width: 20px;
    height: 20px;
    transition: all 0.2s ease;
}

.notification-close:hover { color: var(--luxury-gold); }

.luxury-navbar.scrolled {
    background: rgba(10, 10, 10, 0.98) !important;
    box-shadow: 0 2px 20px rgba(0, 0, 0, 0.5);
}

.form-control.is-invalid {
    border-color: #dc3545;
    box-shadow: 0 0 0 0.2rem rgba(220, 53, 69, 0.25);
}

.invalid-feedback {
    width: 100%;
    margin-top: 0.25rem;
    font-size: 0.875rem;
    color: #dc3545;
}
"#;

pub const NOTIFICATION_STYLE: &str = "position: fixed; top: 20px; right: 20px; \
    background: var(--luxury-dark); color: var(--luxury-white); padding: 1rem 1.5rem; \
    border-radius: 10px; border: 1px solid var(--luxury-gold); z-index: 9999; \
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3); max-width: 350px; display: flex; \
    align-items: center; justify-content: space-between; gap: 1rem;";

pub const BACK_TO_TOP_STYLE: &str = "position: fixed; bottom: 20px; right: 20px; \
    width: 50px; height: 50px; background: var(--luxury-gold); color: var(--luxury-black); \
    border: none; border-radius: 50%; font-size: 1.2rem; cursor: pointer; z-index: 1000; \
    transition: all 0.3s ease;";

pub const SHARE_BACKDROP_STYLE: &str = "display: block; background: rgba(0, 0, 0, 0.6);";
