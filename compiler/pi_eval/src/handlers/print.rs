use crate::errors::EvalResult;
use crate::machine::Machine;

impl Machine<'_> {
    pub(super) fn apply_print(&mut self) -> EvalResult {
        let value = self.values.pop_bindable()?;
        self.print_handler.println(&value.to_string());
        Ok(())
    }
}
